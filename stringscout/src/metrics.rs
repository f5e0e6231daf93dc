use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Tracks how much work a finder did and how often its filter was wrong
#[derive(Debug, Clone)]
pub struct ScanMetrics {
    // Input metrics
    lines_scanned: Arc<AtomicU64>,
    bytes_scanned: Arc<AtomicU64>,

    // Filter metrics
    candidates: Arc<AtomicU64>,
    confirmed: Arc<AtomicU64>,
    false_positives: Arc<AtomicU64>,

    // Cache metrics
    cache_hits: Arc<AtomicU64>,
    cache_misses: Arc<AtomicU64>,
}

impl ScanMetrics {
    /// Creates a new ScanMetrics instance
    pub fn new() -> Self {
        Self {
            lines_scanned: Arc::new(AtomicU64::new(0)),
            bytes_scanned: Arc::new(AtomicU64::new(0)),
            candidates: Arc::new(AtomicU64::new(0)),
            confirmed: Arc::new(AtomicU64::new(0)),
            false_positives: Arc::new(AtomicU64::new(0)),
            cache_hits: Arc::new(AtomicU64::new(0)),
            cache_misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Records one line of input handed to a finder
    pub fn record_line(&self, bytes: u64) {
        self.lines_scanned.fetch_add(1, Ordering::Relaxed);
        self.bytes_scanned.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Records a window the search strategy reported as a possible match
    pub fn record_candidate(&self, confirmed: bool) {
        self.candidates.fetch_add(1, Ordering::Relaxed);
        if confirmed {
            self.confirmed.fetch_add(1, Ordering::Relaxed);
        } else {
            let total = self.false_positives.fetch_add(1, Ordering::Relaxed) + 1;
            debug!("Rejected false positive, {} so far", total);
        }
    }

    /// Records a finder cache lookup
    pub fn record_cache_operation(&self, hit: bool) {
        if hit {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.cache_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> u64 {
        self.cache_misses.load(Ordering::Relaxed)
    }

    /// Gets a snapshot of the counters
    pub fn get_stats(&self) -> ScanStats {
        ScanStats {
            lines_scanned: self.lines_scanned.load(Ordering::Relaxed),
            bytes_scanned: self.bytes_scanned.load(Ordering::Relaxed),
            candidates: self.candidates.load(Ordering::Relaxed),
            confirmed: self.confirmed.load(Ordering::Relaxed),
            false_positives: self.false_positives.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
        }
    }

    /// Logs the current counters
    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "Scan stats:\n\
             Lines scanned: {} ({} bytes)\n\
             Candidates: {} (confirmed {}, false positives {})\n\
             Finder cache hits/misses: {}/{}",
            stats.lines_scanned,
            stats.bytes_scanned,
            stats.candidates,
            stats.confirmed,
            stats.false_positives,
            stats.cache_hits,
            stats.cache_misses
        );
    }
}

impl Default for ScanMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of [`ScanMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ScanStats {
    pub lines_scanned: u64,
    pub bytes_scanned: u64,
    pub candidates: u64,
    pub confirmed: u64,
    pub false_positives: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}
