//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.
//!
//! Hit and miss counters are optional statistics gated by the configuration;
//! the eviction counter is operational telemetry and is always maintained.

use serde::Serialize;

// == Cache Stats ==
/// Internal performance counters.
#[derive(Debug, Clone, Default)]
pub(crate) struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Number of entries evicted under capacity pressure
    pub evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}

// == Stats Snapshot ==
/// Read-only statistics snapshot returned by `ComputeCache::stats`.
///
/// `total_entries` and `evictions` are always reported. The hit/miss fields
/// exist only when statistics are enabled; with statistics disabled they are
/// `None` and absent from the serialized form entirely, not merely zeroed.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Number of entries evicted under capacity pressure
    pub evictions: u64,
    /// Number of cache hits, when statistics are enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<u64>,
    /// Number of cache misses, when statistics are enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misses: Option<u64>,
    /// Hit rate (hits / (hits + misses)), when statistics are enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_rate: Option<f64>,
    /// Wall-clock capture time in ISO 8601 format
    pub captured_at: String,
}

impl StatsSnapshot {
    /// Builds a snapshot from the internal counters.
    pub(crate) fn capture(stats: &CacheStats, total_entries: usize, enable_stats: bool) -> Self {
        let (hits, misses, hit_rate) = if enable_stats {
            (
                Some(stats.hits),
                Some(stats.misses),
                Some(stats.hit_rate()),
            )
        } else {
            (None, None, None)
        };

        Self {
            total_entries,
            evictions: stats.evictions,
            hits,
            misses,
            hit_rate,
            captured_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
