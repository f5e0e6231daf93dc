pub mod compare;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod results;
pub mod search;

pub use compare::{
    edit_distance, equals_ignoring_numbers, natural_cmp, natural_compare, numbers_only_cmp,
    numbers_only_compare, sort_strings, wildcard_match, SortOrder,
};
pub use config::{CliOverrides, ScoutConfig};
pub use errors::{ScoutError, ScoutResult};
pub use metrics::{ScanMetrics, ScanStats};
pub use results::{FileResult, Match, ScanOutput};
pub use search::{
    find_boyer_moore, find_cluster, find_hash, find_verified, scan, scan_lines, Finder,
    SearchStrategy,
};
