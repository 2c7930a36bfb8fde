//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support and
//! per-policy eviction bookkeeping.

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use crate::cache::EvictionPolicy;

// == Eviction Metric ==
/// Per-entry eviction bookkeeping, tagged by the cache's configured policy.
///
/// Recency and frequency are semantically different measurements and must
/// never share storage: an LRU cache that piggybacked on an access counter
/// would evict by frequency, not recency. Keeping them as distinct variants
/// makes that mix-up unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionMetric {
    /// LRU: monotonic reading of the last access. A monotonic clock is used
    /// rather than wall-clock time, which can jump and corrupt recency order.
    Recency(Instant),
    /// LFU: access count, starting at 1 on insertion
    Frequency(u64),
    /// FIFO: insertion sequence number, assigned once and never mutated
    Arrival(u64),
}

impl EvictionMetric {
    // == Initial Value ==
    /// Metric assigned to a freshly inserted entry under the given policy.
    pub fn initial(policy: EvictionPolicy, now: Instant, seq: u64) -> Self {
        match policy {
            EvictionPolicy::Lru => Self::Recency(now),
            EvictionPolicy::Lfu => Self::Frequency(1),
            EvictionPolicy::Fifo => Self::Arrival(seq),
        }
    }

    // == Eviction Order ==
    /// Compares two metrics of the same variant; the smaller one is the
    /// better eviction candidate.
    ///
    /// A cache holds entries of a single policy, so mismatched variants never
    /// meet; that arm falls back to Equal and leaves the decision to the
    /// caller's tie-break.
    pub fn eviction_order(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Recency(a), Self::Recency(b)) => a.cmp(b),
            (Self::Frequency(a), Self::Frequency(b)) => a.cmp(b),
            (Self::Arrival(a), Self::Arrival(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

// == Cache Entry ==
/// Represents a single cache entry with value, expiry deadline and eviction
/// bookkeeping.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The memoized value
    pub value: V,
    /// Absolute expiry deadline, None = no expiration
    pub expires_at: Option<Instant>,
    /// Policy-specific eviction metric
    pub metric: EvictionMetric,
    /// Insertion sequence number; doubles as the eviction tie-breaker and is
    /// never reset on overwrite
    pub seq: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `expires_at` - Absolute deadline, or None for no expiration
    /// * `metric` - Initial eviction metric for the active policy
    /// * `seq` - Insertion sequence number
    pub fn new(value: V, expires_at: Option<Instant>, metric: EvictionMetric, seq: u64) -> Self {
        Self {
            value,
            expires_at,
            metric,
            seq,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired as of `now`.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to the deadline, so a fully elapsed TTL expires
    /// immediately.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }

    // == Touch ==
    /// Records a successful access under the active policy.
    ///
    /// LRU refreshes the recency reading, LFU increments the access count,
    /// FIFO is untouched since access never affects insertion order.
    pub fn touch(&mut self, now: Instant) {
        match &mut self.metric {
            EvictionMetric::Recency(at) => *at = now,
            EvictionMetric::Frequency(count) => *count += 1,
            EvictionMetric::Arrival(_) => {}
        }
    }

    // == Time To Live ==
    /// Returns remaining TTL as of `now`, or None if no expiration is set.
    ///
    /// Useful for debugging and telemetry; returns a zero duration once the
    /// deadline has passed.
    pub fn ttl_remaining(&self, now: Instant) -> Option<Duration> {
        self.expires_at
            .map(|expires| expires.saturating_duration_since(now))
    }
}
