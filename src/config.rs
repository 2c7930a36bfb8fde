//! Configuration Module
//!
//! Handles validation of cache tuning parameters and pure sizing arithmetic.
//!
//! A `CacheConfig` is validated once at construction and immutable afterwards:
//! out-of-range input is rejected with a descriptive error, never clamped or
//! silently corrected.

use std::time::Duration;

use serde::Serialize;

use crate::cache::EvictionPolicy;
use crate::error::{CacheError, Result};

// == Public Constants ==
/// Smallest permitted cache capacity
pub const MIN_MAX_SIZE: usize = 1;

/// Largest permitted cache capacity
pub const MAX_MAX_SIZE: usize = 10_000;

/// Default cache capacity
pub const DEFAULT_MAX_SIZE: usize = 128;

/// Default TTL in seconds
pub const DEFAULT_TTL_SECONDS: u64 = 3600;

/// Default average entry size assumed by `estimate_memory`, in kilobytes
pub const DEFAULT_AVG_ENTRY_SIZE_KB: f64 = 1.0;

// == Cache Config ==
/// Validated cache tuning parameters.
///
/// Fields are private so a value that passed validation can never be mutated
/// back out of range. Cloning a config is cheap; caches built from clones of
/// one config share the configuration but never cache state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    max_size: usize,
    /// TTL in seconds, None = entries never expire
    ttl_seconds: Option<u64>,
    /// Eviction strategy applied under capacity pressure
    eviction_policy: EvictionPolicy,
    /// Whether hit/miss statistics are tracked and reported
    enable_stats: bool,
}

// == Memory Estimate ==
/// Deployment sizing estimate derived from a configuration.
///
/// Used by operators to size deployments before committing a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MemoryEstimate {
    /// Estimated footprint of a full cache, in megabytes
    pub estimated_mb: f64,
    /// Estimated footprint plus a 20% bookkeeping overhead allowance
    pub max_mb: f64,
    /// How many entries of the assumed size fit in one megabyte
    pub entries_per_mb: f64,
}

impl CacheConfig {
    // == Constructor ==
    /// Creates a validated configuration.
    ///
    /// # Arguments
    /// * `max_size` - Capacity bound, must be within `[1, 10000]`
    /// * `ttl_seconds` - TTL in seconds (`>= 1`), or None for no expiry
    /// * `eviction_policy` - Strategy used when the cache is full
    /// * `enable_stats` - Whether hit/miss statistics are tracked
    ///
    /// # Errors
    /// Returns `CacheError::Range` when `max_size` or `ttl_seconds` fall
    /// outside their documented bounds.
    pub fn new(
        max_size: usize,
        ttl_seconds: Option<u64>,
        eviction_policy: EvictionPolicy,
        enable_stats: bool,
    ) -> Result<Self> {
        if !(MIN_MAX_SIZE..=MAX_MAX_SIZE).contains(&max_size) {
            return Err(CacheError::Range(format!(
                "max_size must be within [{}, {}], got {}",
                MIN_MAX_SIZE, MAX_MAX_SIZE, max_size
            )));
        }

        if let Some(ttl) = ttl_seconds {
            if ttl < 1 {
                return Err(CacheError::Range(format!(
                    "ttl_seconds must be >= 1 when present, got {}",
                    ttl
                )));
            }
        }

        Ok(Self {
            max_size,
            ttl_seconds,
            eviction_policy,
            enable_stats,
        })
    }

    // == Accessors ==
    /// Maximum number of entries the cache can hold.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Configured TTL in seconds, None = entries never expire.
    pub fn ttl_seconds(&self) -> Option<u64> {
        self.ttl_seconds
    }

    /// Eviction strategy applied under capacity pressure.
    pub fn eviction_policy(&self) -> EvictionPolicy {
        self.eviction_policy
    }

    /// Whether hit/miss statistics are tracked and reported.
    pub fn enable_stats(&self) -> bool {
        self.enable_stats
    }

    // == Effective TTL (minutes) ==
    /// Returns the TTL as whole minutes (truncating division), or None when
    /// no TTL is configured.
    ///
    /// Display and reporting convenience only. A TTL under 60 seconds
    /// truncates to zero minutes, which is indistinguishable from "already
    /// expired", so expiry arithmetic must always go through [`Self::ttl`]
    /// instead.
    pub fn effective_ttl_minutes(&self) -> Option<u64> {
        self.ttl_seconds.map(|secs| secs / 60)
    }

    // == Effective TTL (seconds) ==
    /// Returns the configured TTL in seconds, or `0` when no TTL is set.
    ///
    /// The `0` is a reporting sentinel meaning "no expiry enforced"; the
    /// cache's insertion logic treats an absent TTL as "no deadline", never
    /// as a zero-duration lifetime.
    pub fn effective_ttl_seconds(&self) -> u64 {
        self.ttl_seconds.unwrap_or(0)
    }

    // == Authoritative TTL ==
    /// Full-precision TTL duration used to derive expiry deadlines, or None
    /// when entries never expire.
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl_seconds.map(Duration::from_secs)
    }

    // == Memory Estimate ==
    /// Estimates the memory footprint of a full cache.
    ///
    /// Pure arithmetic, no cache state involved. Pass
    /// [`DEFAULT_AVG_ENTRY_SIZE_KB`] when no better average is known.
    ///
    /// # Arguments
    /// * `avg_entry_size_kb` - Assumed average entry size in kilobytes
    pub fn estimate_memory(&self, avg_entry_size_kb: f64) -> MemoryEstimate {
        let estimated_mb = round2(self.max_size as f64 * avg_entry_size_kb / 1024.0);
        let max_mb = round2(estimated_mb * 1.2);
        let entries_per_mb = round1(1024.0 / avg_entry_size_kb);

        MemoryEstimate {
            estimated_mb,
            max_mb,
            entries_per_mb,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            ttl_seconds: Some(DEFAULT_TTL_SECONDS),
            eviction_policy: EvictionPolicy::default(),
            enable_stats: true,
        }
    }
}

// == Utility Functions ==
/// Rounds to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
