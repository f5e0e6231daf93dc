use rayon::prelude::*;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use super::finder::Finder;
use super::processor::FileProcessor;
use crate::config::ScoutConfig;
use crate::errors::ScoutResult;
use crate::metrics::ScanMetrics;
use crate::results::{Match, ScanOutput};

/// Finds every match of `finder` in each line of `text`, in parallel.
///
/// Lines are numbered from 1 and split the way [`str::lines`] splits them.
/// Matches come back ordered by line, then by position within the line.
pub fn scan_lines(text: &str, finder: &Finder, thread_count: NonZeroUsize) -> Vec<Match> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .collect();

    let chunk_size = (lines.len() / thread_count.get()).clamp(16, 256);
    debug!(
        "Scanning {} lines in chunks of {} with {} strategy",
        lines.len(),
        chunk_size,
        finder.strategy()
    );

    lines
        .par_chunks(chunk_size)
        .flat_map(|chunk| {
            chunk
                .iter()
                .flat_map(|&(line_number, line)| {
                    finder.metrics().record_line(line.len() as u64);
                    finder
                        .find_all(line)
                        .into_iter()
                        .map(move |(start, end)| Match {
                            line_number,
                            line_content: line.to_string(),
                            start,
                            end,
                        })
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Scans each input for `needle` using the strategy and thread count from
/// `config`. An empty input list reads standard input.
pub fn scan(config: &ScoutConfig, needle: &str, inputs: &[PathBuf]) -> ScoutResult<ScanOutput> {
    info!(
        "Starting {} scan for {:?} across {} inputs",
        config.strategy,
        needle,
        inputs.len()
    );

    let metrics = Arc::new(ScanMetrics::new());
    let finder = Finder::with_metrics(needle, config.strategy, metrics.clone());
    let processor = FileProcessor::new(finder, config.thread_count);

    let mut result = ScanOutput::new();

    if inputs.is_empty() {
        let stdin = std::io::stdin();
        result.add_file_result(processor.process_reader(stdin.lock())?);
    } else {
        let file_results = inputs
            .par_iter()
            .map(|path| processor.process_file(path))
            .collect::<ScoutResult<Vec<_>>>()?;

        for file_result in file_results {
            result.add_file_result(file_result);
        }
    }

    metrics.log_stats();

    info!(
        "Scan complete. Found {} matches in {} of {} inputs",
        result.total_matches, result.files_with_matches, result.files_scanned
    );

    Ok(result)
}
