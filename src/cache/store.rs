//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with policy-driven eviction
//! and lazy TTL expiration.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, EvictionMetric, StatsSnapshot};
use crate::config::CacheConfig;

// == Compute Cache ==
/// Bounded memoization cache with TTL expiration and pluggable eviction.
///
/// Keys are caller-computed fingerprints of a computation's inputs; values
/// are the memoized results. Only point lookups are supported; no iteration
/// order over the contents is guaranteed.
///
/// A cache instance is exclusively owned by one caller: all operations take
/// `&mut self` and there is no internal locking. To share an instance across
/// threads or tasks, wrap it in the host's own synchronization (a mutex, an
/// RwLock, or a single-owner actor). Caches built from clones of the same
/// [`CacheConfig`] are fully independent; only the configuration is shared.
///
/// Expiry is lazy: expired entries are removed when a lookup observes them,
/// and otherwise linger until capacity pressure evicts them. There is no
/// background sweeper.
#[derive(Debug)]
pub struct ComputeCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Next insertion sequence number, monotonically increasing
    next_seq: u64,
    /// Performance counters
    stats: CacheStats,
    /// Validated configuration the cache was built from
    config: CacheConfig,
}

impl<V: Clone> ComputeCache<V> {
    // == Constructor ==
    /// Creates a new cache from a validated configuration.
    ///
    /// The eviction policy inside a [`CacheConfig`] is already a parsed enum
    /// variant, so construction cannot observe an invalid policy; a bad
    /// policy name fails earlier, at the string boundary.
    pub fn new(config: CacheConfig) -> Self {
        debug!(
            "cache initialized: max_size={}, ttl={:?}s, policy={}, stats={}",
            config.max_size(),
            config.ttl_seconds(),
            config.eviction_policy(),
            config.enable_stats()
        );

        Self {
            entries: HashMap::with_capacity(config.max_size()),
            next_seq: 0,
            stats: CacheStats::new(),
            config,
        }
    }

    // == Put ==
    /// Stores a key-value pair, evicting one entry first if at capacity.
    ///
    /// An existing key is overwritten in place: the value and expiry deadline
    /// are replaced and the access metric is updated as if the entry had been
    /// read (LRU recency refresh, LFU count increment). FIFO ordering is
    /// pinned to the original insertion and is not reset by overwrites.
    ///
    /// # Arguments
    /// * `key` - Fingerprint of the computation's inputs
    /// * `value` - The result to memoize
    /// * `ttl_override_minutes` - Per-entry TTL in whole minutes, overriding
    ///   the configured TTL for this entry only
    pub fn put(&mut self, key: String, value: V, ttl_override_minutes: Option<u64>) {
        let now = Instant::now();
        let expires_at = self.deadline(now, ttl_override_minutes);

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            entry.expires_at = expires_at;
            entry.touch(now);
            return;
        }

        // Evict before inserting so the table never transiently exceeds
        // max_size.
        if self.entries.len() >= self.config.max_size() {
            self.evict_one();
        }

        let seq = self.next_seq;
        self.next_seq += 1;

        let metric = EvictionMetric::initial(self.config.eviction_policy(), now, seq);
        self.entries
            .insert(key, CacheEntry::new(value, expires_at, metric, seq));
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if present and not expired. An expired entry is
    /// removed lazily and counted as a miss; a hit updates the entry's
    /// eviction metric under the active policy.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = Instant::now();

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired_at(now),
            None => {
                self.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.record_miss();
            trace!("lazily removed expired entry '{}'", key);
            return None;
        }

        let entry = self.entries.get_mut(key)?;
        entry.touch(now);
        let value = entry.value.clone();
        self.record_hit();
        Some(value)
    }

    // == Invalidate ==
    /// Removes an entry by key.
    ///
    /// Returns whether an entry was present. Invalidating an absent key is a
    /// no-op, not an error.
    pub fn invalidate(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes all entries and resets the insertion sequence counter.
    ///
    /// Lifetime statistics (hits, misses, evictions) are preserved.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.next_seq = 0;
        debug!("cache cleared: {} entries removed", removed);
    }

    // == Stats ==
    /// Returns a read-only statistics snapshot.
    ///
    /// `total_entries` and `evictions` are always reported; hit/miss counts
    /// and the hit rate are present only when statistics are enabled.
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot::capture(&self.stats, self.entries.len(), self.config.enable_stats())
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    ///
    /// Expired entries count until a lookup removes them lazily.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Config ==
    /// The validated configuration this cache was built from.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Expiry Deadline ==
    /// Computes the absolute deadline for an insertion.
    ///
    /// An explicit override (whole minutes, the caller's granularity) wins
    /// over the configured TTL; with neither, the entry never expires. The
    /// deadline always derives from the full-precision TTL in seconds, never
    /// from the minute-truncated reporting value.
    fn deadline(&self, now: Instant, ttl_override_minutes: Option<u64>) -> Option<Instant> {
        let ttl = match ttl_override_minutes {
            Some(minutes) => Some(Duration::from_secs(minutes.saturating_mul(60))),
            None => self.config.ttl(),
        };

        // A deadline too distant to represent is the same as no deadline.
        ttl.and_then(|ttl| now.checked_add(ttl))
    }

    // == Evict One ==
    /// Removes the entry the active policy ranks as the best victim.
    ///
    /// The victim is the entry with the smallest metric; ties go to the
    /// smallest insertion sequence, so the oldest inserted entry loses.
    /// Eviction counting is operational telemetry and is not gated by
    /// `enable_stats`.
    fn evict_one(&mut self) {
        let victim = self
            .entries
            .iter()
            .min_by(|(_, a), (_, b)| {
                a.metric
                    .eviction_order(&b.metric)
                    .then(a.seq.cmp(&b.seq))
            })
            .map(|(key, _)| key.clone());

        if let Some(key) = victim {
            self.entries.remove(&key);
            self.stats.record_eviction();
            debug!(
                "evicted '{}' under {} policy",
                key,
                self.config.eviction_policy()
            );
        }
    }

    fn record_hit(&mut self) {
        if self.config.enable_stats() {
            self.stats.record_hit();
        }
    }

    fn record_miss(&mut self) {
        if self.config.enable_stats() {
            self.stats.record_miss();
        }
    }
}
