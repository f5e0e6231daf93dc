use dashmap::DashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, trace};

use super::boyer_moore::find_boyer_moore;
use super::cluster::{code_sum, find_cluster_with};
use super::hash::find_hash_with;
use super::rolling_hash::RollingHash;
use crate::errors::ScoutError;
use crate::metrics::ScanMetrics;

static PROFILE_CACHE: Lazy<DashMap<String, NeedleProfile>> = Lazy::new(DashMap::new);

/// Which substring search a [`Finder`] runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Sliding sum of character codes; reports anagram and sum collisions
    Cluster,
    /// Sliding rolling hash; may report hash collisions
    Hash,
    /// Sliding rolling hash with every hit checked against the needle
    #[default]
    Verified,
    /// Right-to-left exact comparison
    BoyerMoore,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 4] = [
        SearchStrategy::Cluster,
        SearchStrategy::Hash,
        SearchStrategy::Verified,
        SearchStrategy::BoyerMoore,
    ];

    /// Whether every match this strategy reports is an exact occurrence
    pub fn is_exact(self) -> bool {
        matches!(self, SearchStrategy::Verified | SearchStrategy::BoyerMoore)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchStrategy::Cluster => "cluster",
            SearchStrategy::Hash => "hash",
            SearchStrategy::Verified => "verified",
            SearchStrategy::BoyerMoore => "boyer-moore",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchStrategy {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cluster" => Ok(SearchStrategy::Cluster),
            "hash" | "rolling-hash" => Ok(SearchStrategy::Hash),
            "verified" => Ok(SearchStrategy::Verified),
            "boyer-moore" | "bm" => Ok(SearchStrategy::BoyerMoore),
            _ => Err(ScoutError::invalid_strategy(s)),
        }
    }
}

/// Signatures of a needle that the sliding strategies compare windows against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NeedleProfile {
    width: usize,
    sum: u64,
    hash: u32,
}

impl NeedleProfile {
    fn of(needle: &str) -> Self {
        Self {
            width: needle.chars().count(),
            sum: code_sum(needle),
            hash: RollingHash::hash_of(needle),
        }
    }
}

/// Searches text for one needle with a chosen strategy
#[derive(Debug, Clone)]
pub struct Finder {
    needle: String,
    strategy: SearchStrategy,
    profile: NeedleProfile,
    metrics: Arc<ScanMetrics>,
}

impl Finder {
    /// Creates a new Finder for the given needle
    pub fn new(needle: impl Into<String>, strategy: SearchStrategy) -> Self {
        Self::with_metrics(needle, strategy, Arc::new(ScanMetrics::new()))
    }

    /// Creates a new Finder that records into the given metrics
    pub fn with_metrics(
        needle: impl Into<String>,
        strategy: SearchStrategy,
        metrics: Arc<ScanMetrics>,
    ) -> Self {
        let needle = needle.into();

        let profile = if let Some(entry) = PROFILE_CACHE.get(&needle) {
            metrics.record_cache_operation(true);
            *entry
        } else {
            let profile = NeedleProfile::of(&needle);
            metrics.record_cache_operation(false);
            PROFILE_CACHE.insert(needle.clone(), profile);
            profile
        };

        debug!(
            "Prepared {} finder for {:?} ({} chars)",
            strategy, needle, profile.width
        );

        Self {
            needle,
            strategy,
            profile,
            metrics,
        }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Gets the metrics this finder records into
    pub fn metrics(&self) -> &ScanMetrics {
        &self.metrics
    }

    /// Byte offset of the first match in `haystack`
    pub fn find(&self, haystack: &str) -> Option<usize> {
        let needle = self.needle.as_str();
        let profile = self.profile;
        let metrics = &self.metrics;

        // Approximate strategies accept every hit; the check only feeds metrics
        let observe = |start: usize| {
            metrics.record_candidate(haystack[start..].starts_with(needle));
            true
        };

        match self.strategy {
            SearchStrategy::Cluster => {
                find_cluster_with(haystack, profile.width, profile.sum, observe)
            }
            SearchStrategy::Hash => find_hash_with(haystack, profile.width, profile.hash, observe),
            SearchStrategy::Verified => {
                find_hash_with(haystack, profile.width, profile.hash, |start| {
                    let confirmed = haystack[start..].starts_with(needle);
                    metrics.record_candidate(confirmed);
                    confirmed
                })
            }
            SearchStrategy::BoyerMoore => {
                let found = find_boyer_moore(haystack, needle);
                if found.is_some() {
                    metrics.record_candidate(true);
                }
                found
            }
        }
    }

    /// Whether the strategy reports any match in `haystack`
    pub fn is_match(&self, haystack: &str) -> bool {
        self.find(haystack).is_some()
    }

    /// Finds all non-overlapping matches in the given text as byte ranges.
    ///
    /// An empty needle never produces matches here, although [`find`](Self::find)
    /// reports it at offset 0.
    pub fn find_all(&self, text: &str) -> Vec<(usize, usize)> {
        let mut matches = Vec::new();
        if self.needle.is_empty() {
            return matches;
        }

        let mut pos = 0;
        while pos < text.len() {
            let rest = &text[pos..];
            let Some(offset) = self.find(rest) else {
                break;
            };

            // Approximate matches may span a different number of bytes than
            // the needle, so measure the window in characters
            let window_end = rest[offset..]
                .char_indices()
                .nth(self.profile.width)
                .map_or(rest.len(), |(i, _)| offset + i);

            let start = pos + offset;
            let end = pos + window_end;
            trace!("Match for {:?} at {}..{}", self.needle, start, end);
            matches.push((start, end));
            pos = end;
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_round_trip_names() {
        for strategy in SearchStrategy::ALL {
            assert_eq!(strategy.as_str().parse::<SearchStrategy>().unwrap(), strategy);
        }
        assert_eq!("BM".parse::<SearchStrategy>().unwrap(), SearchStrategy::BoyerMoore);
        assert!(matches!(
            "quantum".parse::<SearchStrategy>(),
            Err(ScoutError::InvalidStrategy(_))
        ));
    }

    #[test]
    fn test_default_strategy_is_exact() {
        assert!(SearchStrategy::default().is_exact());
        assert!(!SearchStrategy::Cluster.is_exact());
        assert!(!SearchStrategy::Hash.is_exact());
    }

    #[test]
    fn test_find_all_exact_strategies() {
        let text = "this is a test string with test pattern";
        for strategy in [SearchStrategy::Verified, SearchStrategy::BoyerMoore] {
            let finder = Finder::new("test", strategy);
            let matches = finder.find_all(text);
            assert_eq!(matches.len(), 2, "strategy {}", strategy);
            for (start, end) in matches {
                assert_eq!(&text[start..end], "test");
            }
        }
    }

    #[test]
    fn test_find_all_is_non_overlapping() {
        let finder = Finder::new("aa", SearchStrategy::BoyerMoore);
        assert_eq!(finder.find_all("aaaaa"), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn test_find_all_empty_needle() {
        let finder = Finder::new("", SearchStrategy::Verified);
        assert!(finder.find_all("anything").is_empty());
        assert_eq!(finder.find("anything"), Some(0));
    }

    #[test]
    fn test_cluster_false_positives_are_counted() {
        let finder = Finder::new("bbb", SearchStrategy::Cluster);
        assert_eq!(finder.find("contains abc match"), Some(9));

        let stats = finder.metrics().get_stats();
        assert_eq!(stats.candidates, 1);
        assert_eq!(stats.false_positives, 1);
    }

    #[test]
    fn test_verified_rejects_collisions() {
        let finder = Finder::new("bbb", SearchStrategy::Verified);
        assert_eq!(finder.find("contains abc match"), None);
        assert!(!finder.is_match("contains abc match"));
        assert!(finder.is_match("contains bbb match"));
    }

    #[test]
    fn test_cluster_window_measured_in_chars() {
        // "ab" and "ba" collide; the reported window is two chars wide
        let finder = Finder::new("ab", SearchStrategy::Cluster);
        let text = "é ba";
        assert_eq!(finder.find_all(text), vec![(3, 5)]);
    }

    #[test]
    fn test_profile_caching() {
        // Use a unique needle for this test to avoid interference from other tests
        let unique_needle = format!(
            "needle_{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        );

        let metrics = Arc::new(ScanMetrics::default());

        let _first = Finder::with_metrics(unique_needle.clone(), SearchStrategy::Hash, metrics.clone());
        assert_eq!(metrics.cache_hits(), 0, "First creation should have no cache hits");
        assert_eq!(metrics.cache_misses(), 1, "First creation should have one cache miss");

        // A different strategy reuses the same needle profile
        let _second = Finder::with_metrics(unique_needle.clone(), SearchStrategy::Cluster, metrics.clone());
        assert_eq!(metrics.cache_hits(), 1, "Second creation should hit the cache");
        assert_eq!(metrics.cache_misses(), 1);

        let _third = Finder::with_metrics(format!("{}_different", unique_needle), SearchStrategy::Hash, metrics.clone());
        assert_eq!(metrics.cache_hits(), 1, "Different needle should not add cache hits");
        assert_eq!(metrics.cache_misses(), 2);
    }
}
