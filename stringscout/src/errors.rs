//! Error types for the fallible surfaces of stringscout.
//!
//! The search and comparison engine itself never fails: a needle that cannot
//! fit gives `None`, an absent string sorts first. Errors only arise around
//! the engine, when loading configuration, reading input files or parsing
//! names of strategies and sort orders.
use std::path::PathBuf;
use thiserror::Error;

/// Result type for stringscout operations
pub type ScoutResult<T> = Result<T, ScoutError>;

/// Errors that can occur while preparing or feeding a scan
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Unknown search strategy: {0}")]
    InvalidStrategy(String),
    #[error("Unknown sort order: {0}")]
    InvalidSortOrder(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid UTF-8 in file {path}: {source}")]
    EncodingError {
        path: PathBuf,
        source: std::str::Utf8Error,
    },
}

impl ScoutError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    pub fn invalid_strategy(name: impl Into<String>) -> Self {
        Self::InvalidStrategy(name.into())
    }

    pub fn invalid_sort_order(name: impl Into<String>) -> Self {
        Self::InvalidSortOrder(name.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn encoding_error(path: impl Into<PathBuf>, source: std::str::Utf8Error) -> Self {
        Self::EncodingError {
            path: path.into(),
            source,
        }
    }

    /// Maps an IO error raised while opening `path` onto the matching variant
    pub(crate) fn from_io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::file_not_found(path),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => Self::IoError(err),
        }
    }
}

impl From<config::ConfigError> for ScoutError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}
