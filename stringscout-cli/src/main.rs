use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, Read};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use stringscout::{
    compare::filter_lines,
    edit_distance, equals_ignoring_numbers,
    results::{FileResult, Match, ScanOutput},
    scan, sort_strings, CliOverrides, ScoutConfig, SearchStrategy, SortOrder,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a substring in files or standard input
    Find {
        /// Text to search for
        #[arg(short = 'n', long)]
        needle: String,

        /// Search strategy (cluster|hash|verified|boyer-moore)
        #[arg(short = 's', long)]
        strategy: Option<SearchStrategy>,

        /// Number of threads to use
        #[arg(short = 'j', long)]
        threads: Option<NonZeroUsize>,

        /// Print totals and elapsed time after the matches
        #[arg(long)]
        stats: bool,

        /// Print the whole result as JSON
        #[arg(long)]
        json: bool,

        /// Files to scan (standard input when empty)
        files: Vec<PathBuf>,
    },

    /// Print lines that fit a wildcard mask
    Match {
        /// Mask using `*` and `?`
        #[arg(short = 'm', long)]
        mask: String,

        /// Ignore case when comparing literal characters
        #[arg(short = 'i', long)]
        ignore_case: bool,

        /// Files to read (standard input when empty)
        files: Vec<PathBuf>,
    },

    /// Print lines in sorted order
    Sort {
        /// Sort order (natural|numbers-only|ordinal)
        #[arg(short = 'o', long)]
        order: Option<SortOrder>,

        /// Reverse the result
        #[arg(short = 'r', long)]
        reverse: bool,

        /// Files to read (standard input when empty)
        files: Vec<PathBuf>,
    },

    /// Exit with success when two strings differ only in their numbers
    Same { left: String, right: String },

    /// Print the edit distance between two strings
    Distance { left: String, right: String },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        ..CliOverrides::default()
    };
    match &cli.command {
        Commands::Find {
            strategy, threads, ..
        } => {
            overrides.strategy = *strategy;
            overrides.thread_count = *threads;
        }
        Commands::Match { ignore_case, .. } => overrides.ignore_case = *ignore_case,
        Commands::Sort { order, .. } => overrides.sort_order = *order,
        Commands::Same { .. } | Commands::Distance { .. } => {}
    }

    let config = ScoutConfig::load_from(cli.config.as_deref())
        .context("Failed to load configuration")?
        .merge_with_cli(overrides);

    init_logging(&config.log_level);
    debug!("Effective configuration: {:?}", config);

    run(cli.command, &config)
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands, config: &ScoutConfig) -> Result<ExitCode> {
    match command {
        Commands::Find {
            needle,
            stats,
            json,
            files,
            ..
        } => {
            let started = Instant::now();
            let output = scan(config, &needle, &files)?;
            let elapsed = started.elapsed();

            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_scan_output(&output);
            }
            if stats {
                print_stats(&output, config.strategy, elapsed);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Match { mask, files, .. } => {
            let inputs = read_inputs(&files)?;
            let show_path = inputs.len() > 1;
            for (path, text) in &inputs {
                for (_, line) in filter_lines(text, &mask, config.ignore_case) {
                    match path {
                        Some(path) if show_path => {
                            println!("{}:{}", path.display().to_string().blue(), line)
                        }
                        _ => println!("{}", line),
                    }
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Sort { reverse, files, .. } => {
            let inputs = read_inputs(&files)?;
            let mut lines: Vec<&str> = inputs
                .iter()
                .flat_map(|(_, text)| text.lines())
                .collect();

            sort_strings(&mut lines, config.sort_order);
            if reverse {
                lines.reverse();
            }
            for line in lines {
                println!("{}", line);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Same { left, right } => {
            if equals_ignoring_numbers(Some(left.as_str()), Some(right.as_str())) {
                println!("same");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("different");
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Distance { left, right } => {
            println!("{}", edit_distance(&left, &right));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Reads every file in order, or standard input when no files are given
fn read_inputs(files: &[PathBuf]) -> Result<Vec<(Option<PathBuf>, String)>> {
    if files.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;
        return Ok(vec![(None, text)]);
    }

    files
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok((Some(path.clone()), text))
        })
        .collect()
}

fn print_scan_output(output: &ScanOutput) {
    for file_result in &output.file_results {
        print_file_matches(file_result);
    }
}

fn print_file_matches(file_result: &FileResult) {
    let prefix = file_result
        .path
        .as_deref()
        .map(|p| format!("{}:", p.display().to_string().blue()))
        .unwrap_or_default();

    let matches = &file_result.matches;
    let mut index = 0;
    while index < matches.len() {
        let line_number = matches[index].line_number;
        let mut end = index;
        while end < matches.len() && matches[end].line_number == line_number {
            end += 1;
        }

        println!(
            "{}{}: {}",
            prefix,
            line_number.to_string().green(),
            highlight(&matches[index..end])
        );
        index = end;
    }
}

/// Renders one line with every match on it highlighted
fn highlight(line_matches: &[Match]) -> String {
    let Some(first) = line_matches.first() else {
        return String::new();
    };
    let line = first.line_content.as_str();

    let mut rendered = String::with_capacity(line.len());
    let mut cursor = 0;
    for m in line_matches {
        rendered.push_str(&line[cursor..m.start]);
        rendered.push_str(&line[m.start..m.end].red().bold().to_string());
        cursor = m.end;
    }
    rendered.push_str(&line[cursor..]);
    rendered
}

fn print_stats(output: &ScanOutput, strategy: SearchStrategy, elapsed: std::time::Duration) {
    println!(
        "\nFound {} matches on {} lines in {} of {} inputs ({} strategy, {})",
        output.total_matches,
        output.lines_with_matches,
        output.files_with_matches,
        output.files_scanned,
        strategy,
        humantime::format_duration(elapsed)
    );
}
