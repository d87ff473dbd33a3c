//! Metrics registry for lexicache
//!
//! - Counters only (no gauges, no histograms)
//! - Monotonic increase
//! - Reset only on process start
//! - Thread-safe but lock-minimal

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics registry containing all operational counters
///
/// # Thread Safety
///
/// All counters use atomic operations with Relaxed ordering; exact
/// cross-counter consistency is not required for metrics.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Total lookup requests
    lookups: AtomicU64,
    /// Lookups served from the cache
    cache_hits: AtomicU64,
    /// Lookups that ran the full pipeline
    cache_misses: AtomicU64,
    /// Successful generation calls
    generations: AtomicU64,
    /// Failed generation calls (including undecodable output)
    generation_failures: AtomicU64,
    /// Data rows appended to the durable store
    rows_appended: AtomicU64,
    /// Failed store appends
    persist_failures: AtomicU64,
    /// Stored rows skipped during bootstrap replay
    rows_skipped: AtomicU64,
    /// Cache entries evicted
    evictions: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment total lookups
    pub fn incr_lookups(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment cache hits
    pub fn incr_cache_hits(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment cache misses
    pub fn incr_cache_misses(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment successful generations
    pub fn incr_generations(&self) {
        self.generations.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment failed generations
    pub fn incr_generation_failures(&self) {
        self.generation_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Add appended row count
    pub fn add_rows_appended(&self, rows: u64) {
        self.rows_appended.fetch_add(rows, Ordering::Relaxed);
    }

    /// Increment failed persists
    pub fn incr_persist_failures(&self) {
        self.persist_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment skipped rows
    pub fn incr_rows_skipped(&self) {
        self.rows_skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment cache evictions
    pub fn incr_evictions(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    /// Total lookups
    pub fn lookups(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Cache hits
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    /// Cache misses
    pub fn cache_misses(&self) -> u64 {
        self.cache_misses.load(Ordering::Relaxed)
    }

    /// Successful generations
    pub fn generations(&self) -> u64 {
        self.generations.load(Ordering::Relaxed)
    }

    /// Failed generations
    pub fn generation_failures(&self) -> u64 {
        self.generation_failures.load(Ordering::Relaxed)
    }

    /// Rows appended
    pub fn rows_appended(&self) -> u64 {
        self.rows_appended.load(Ordering::Relaxed)
    }

    /// Failed persists
    pub fn persist_failures(&self) -> u64 {
        self.persist_failures.load(Ordering::Relaxed)
    }

    /// Rows skipped during replay
    pub fn rows_skipped(&self) -> u64 {
        self.rows_skipped.load(Ordering::Relaxed)
    }

    /// Cache evictions
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = MetricsRegistry::new();
        assert_eq!(metrics.lookups(), 0);
        assert_eq!(metrics.cache_hits(), 0);
        assert_eq!(metrics.rows_appended(), 0);
    }

    #[test]
    fn test_counters_increment() {
        let metrics = MetricsRegistry::new();
        metrics.incr_lookups();
        metrics.incr_lookups();
        metrics.incr_cache_hits();
        metrics.add_rows_appended(3);

        assert_eq!(metrics.lookups(), 2);
        assert_eq!(metrics.cache_hits(), 1);
        assert_eq!(metrics.rows_appended(), 3);
    }

    #[test]
    fn test_counters_thread_safe() {
        use std::sync::Arc;
        use std::thread;

        let metrics = Arc::new(MetricsRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let m = Arc::clone(&metrics);
                thread::spawn(move || {
                    for _ in 0..100 {
                        m.incr_lookups();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.lookups(), 800);
    }
}
