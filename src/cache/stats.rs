//! Cache Statistics Module
//!
//! Tracks store activity: hits, misses and the two eviction paths.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time snapshot of store activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of loads that returned a live value
    pub hits: u64,
    /// Number of loads that found nothing (absent or expired)
    pub misses: u64,
    /// Number of expired entries removed by a load that discovered them
    pub expired_on_load: u64,
    /// Number of expired entries removed by sweeps
    pub swept: u64,
    /// Current number of entries in the store, expired ones included
    pub total_entries: usize,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no loads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total entries removed because they expired, by either path.
    pub fn expirations(&self) -> u64 {
        self.expired_on_load + self.swept
    }
}

// == Stats Counters ==
/// Lock-free counters updated from `&self` store operations.
#[derive(Debug, Default)]
pub(crate) struct StatsCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    expired_on_load: AtomicU64,
    swept: AtomicU64,
}

impl StatsCounters {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_expired_on_load(&self) {
        self.expired_on_load.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_swept(&self, removed: usize) {
        self.swept.fetch_add(removed as u64, Ordering::Relaxed);
    }

    /// Builds a snapshot; `total_entries` is supplied by the store.
    pub fn snapshot(&self, total_entries: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expired_on_load: self.expired_on_load.load(Ordering::Relaxed),
            swept: self.swept.load(Ordering::Relaxed),
            total_entries,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = StatsCounters::default().snapshot(0);
        assert_eq!(stats, CacheStats::default());
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let counters = StatsCounters::default();
        counters.record_hit();
        counters.record_hit();
        counters.record_hit();
        counters.record_miss();
        assert_eq!(counters.snapshot(0).hit_rate(), 0.75);
    }

    #[test]
    fn test_expirations_sum_both_paths() {
        let counters = StatsCounters::default();
        counters.record_expired_on_load();
        counters.record_swept(4);

        let stats = counters.snapshot(7);
        assert_eq!(stats.expired_on_load, 1);
        assert_eq!(stats.swept, 4);
        assert_eq!(stats.expirations(), 5);
        assert_eq!(stats.total_entries, 7);
    }

    #[test]
    fn test_stats_serialize() {
        let counters = StatsCounters::default();
        counters.record_hit();

        let json = serde_json::to_value(counters.snapshot(2)).unwrap();
        assert_eq!(json["hits"], 1);
        assert_eq!(json["total_entries"], 2);
    }
}
