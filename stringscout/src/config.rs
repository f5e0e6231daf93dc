use config::{Config as ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::compare::SortOrder;
use crate::errors::{ScoutError, ScoutResult};
use crate::search::SearchStrategy;

/// Settings shared by every stringscout command.
///
/// # Where settings come from
///
/// Later sources override earlier ones:
/// 1. Global `$CONFIG_DIR/stringscout/config.yaml`
/// 2. Local `.stringscout.yaml` in the current directory
/// 3. A file passed with `--config`
///
/// Every field is optional, so an empty file is a valid configuration.
///
/// # Example
///
/// ```yaml
/// # cluster, hash, verified or boyer-moore
/// strategy: verified
///
/// # Compare literals case-insensitively in wildcard masks
/// ignore_case: false
///
/// # natural, numbers-only or ordinal
/// sort_order: natural
///
/// # Worker threads; every logical CPU when omitted
/// thread_count: 4
///
/// # Any tracing level name
/// log_level: "warn"
/// ```
///
/// Command-line flags take precedence over file values through
/// [`ScoutConfig::merge_with_cli`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// Substring search used by `find`
    #[serde(default)]
    pub strategy: SearchStrategy,

    /// Whether wildcard masks ignore case
    #[serde(default)]
    pub ignore_case: bool,

    /// Ordering used by `sort`
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Worker threads for line scanning and sorting
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            ignore_case: false,
            sort_order: SortOrder::default(),
            thread_count: default_thread_count(),
            log_level: default_log_level(),
        }
    }
}

/// Values given explicitly on the command line. `None` leaves the file
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub strategy: Option<SearchStrategy>,
    pub ignore_case: bool,
    pub sort_order: Option<SortOrder>,
    pub thread_count: Option<NonZeroUsize>,
    pub log_level: Option<String>,
}

impl ScoutConfig {
    /// Reads the global and local files, if present
    pub fn load() -> ScoutResult<Self> {
        Self::load_from(None)
    }

    /// Loads configuration from the default locations plus an explicit file.
    ///
    /// The explicit file must exist; the default locations are skipped when
    /// absent.
    pub fn load_from(config_path: Option<&Path>) -> ScoutResult<Self> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ScoutError::file_not_found(path));
            }
        }

        let mut builder = ConfigBuilder::builder();

        let config_files = [
            dirs::config_dir().map(|p| p.join("stringscout/config.yaml")),
            Some(PathBuf::from(".stringscout.yaml")),
            config_path.map(PathBuf::from),
        ];

        for path in config_files.iter().flatten() {
            if path.exists() {
                debug!("Reading configuration from {}", path.display());
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Applies command-line values on top of file values
    pub fn merge_with_cli(mut self, cli: CliOverrides) -> Self {
        if let Some(strategy) = cli.strategy {
            self.strategy = strategy;
        }
        if cli.ignore_case {
            self.ignore_case = true;
        }
        if let Some(sort_order) = cli.sort_order {
            self.sort_order = sort_order;
        }
        if let Some(thread_count) = cli.thread_count {
            self.thread_count = thread_count;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
        self
    }
}
