//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the cache's correctness properties under
//! arbitrary operation sequences.

use proptest::prelude::*;

use crate::cache::{ComputeCache, EvictionPolicy};
use crate::config::CacheConfig;

// == Test Configuration ==
const TEST_MAX_SIZE: usize = 100;
const TEST_TTL_SECONDS: u64 = 300;

fn test_cache(max_size: usize, policy: EvictionPolicy) -> ComputeCache<String> {
    let config = CacheConfig::new(max_size, Some(TEST_TTL_SECONDS), policy, true).unwrap();
    ComputeCache::new(config)
}

// == Strategies ==
/// Generates valid cache keys (non-empty fingerprints)
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}".prop_map(|s| s)
}

/// Generates memoized values
fn valid_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,256}".prop_map(|s| s)
}

/// Generates one of the three eviction policies
fn policy_strategy() -> impl Strategy<Value = EvictionPolicy> {
    prop_oneof![
        Just(EvictionPolicy::Lru),
        Just(EvictionPolicy::Lfu),
        Just(EvictionPolicy::Fifo),
    ]
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: String },
    Get { key: String },
    Invalidate { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (valid_key_strategy(), valid_value_strategy())
            .prop_map(|(key, value)| CacheOp::Put { key, value }),
        valid_key_strategy().prop_map(|key| CacheOp::Get { key }),
        valid_key_strategy().prop_map(|key| CacheOp::Invalidate { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Statistics accuracy: for any operation sequence, the reported hit and
    // miss counters match the observed lookup outcomes exactly.
    #[test]
    fn prop_statistics_accuracy(
        policy in policy_strategy(),
        ops in prop::collection::vec(cache_op_strategy(), 1..50),
    ) {
        let mut store = test_cache(TEST_MAX_SIZE, policy);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    store.put(key, value, None);
                }
                CacheOp::Get { key } => {
                    match store.get(&key) {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                }
                CacheOp::Invalidate { key } => {
                    store.invalidate(&key);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, Some(expected_hits), "Hits mismatch");
        prop_assert_eq!(stats.misses, Some(expected_misses), "Misses mismatch");
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");
    }

    // Round-trip: any stored pair is retrievable before expiration with the
    // exact value that was stored.
    #[test]
    fn prop_roundtrip_storage(
        policy in policy_strategy(),
        key in valid_key_strategy(),
        value in valid_value_strategy(),
    ) {
        let mut store = test_cache(TEST_MAX_SIZE, policy);

        store.put(key.clone(), value.clone(), None);

        let retrieved = store.get(&key);
        prop_assert_eq!(retrieved, Some(value), "Round-trip value mismatch");
    }

    // Overwrite semantics: storing V1 then V2 under one key yields V2 and a
    // single entry.
    #[test]
    fn prop_overwrite_semantics(
        policy in policy_strategy(),
        key in valid_key_strategy(),
        value1 in valid_value_strategy(),
        value2 in valid_value_strategy(),
    ) {
        let mut store = test_cache(TEST_MAX_SIZE, policy);

        store.put(key.clone(), value1, None);
        store.put(key.clone(), value2.clone(), None);

        prop_assert_eq!(store.get(&key), Some(value2), "Overwrite should return new value");
        prop_assert_eq!(store.len(), 1, "Should have exactly one entry after overwrite");
    }

    // Invalidate removes the entry; a second invalidate is a no-op.
    #[test]
    fn prop_invalidate_removes_entry(
        policy in policy_strategy(),
        key in valid_key_strategy(),
        value in valid_value_strategy(),
    ) {
        let mut store = test_cache(TEST_MAX_SIZE, policy);

        store.put(key.clone(), value, None);
        prop_assert!(store.get(&key).is_some(), "Key should exist before invalidate");

        prop_assert!(store.invalidate(&key));
        prop_assert!(store.get(&key).is_none(), "Key should not exist after invalidate");

        let len_before = store.len();
        prop_assert!(!store.invalidate(&key), "Second invalidate should be a no-op");
        prop_assert_eq!(store.len(), len_before);
    }

    // Capacity enforcement: under any policy and any put sequence, the table
    // never exceeds max_size.
    #[test]
    fn prop_capacity_enforcement(
        policy in policy_strategy(),
        entries in prop::collection::vec(
            (valid_key_strategy(), valid_value_strategy()),
            1..200
        ),
    ) {
        let max_size = 50; // Use smaller bound for testing
        let mut store = test_cache(max_size, policy);

        for (key, value) in entries {
            store.put(key, value, None);
            prop_assert!(
                store.len() <= max_size,
                "Cache size {} exceeds max {}",
                store.len(),
                max_size
            );
        }
    }

    // Eviction accounting: with distinct keys and no lookups, exactly the
    // overflow beyond max_size is evicted, and the counter records it even
    // though hit/miss statistics are disabled.
    #[test]
    fn prop_eviction_accounting(
        policy in policy_strategy(),
        key_count in 1usize..120,
    ) {
        let max_size = 25;
        let config = CacheConfig::new(max_size, Some(TEST_TTL_SECONDS), policy, false).unwrap();
        let mut store: ComputeCache<String> = ComputeCache::new(config);

        for i in 0..key_count {
            store.put(format!("key_{}", i), format!("value_{}", i), None);
        }

        let stats = store.stats();
        let expected_evictions = key_count.saturating_sub(max_size) as u64;
        prop_assert_eq!(stats.evictions, expected_evictions, "Eviction count mismatch");
        prop_assert_eq!(stats.total_entries, key_count.min(max_size));
        prop_assert!(stats.hits.is_none(), "Gated field must stay absent");
    }

    // Oldest-insertion eviction: with puts only (no lookups), every policy
    // selects the first-inserted key — LRU by stalest recency, LFU by the
    // all-equal-counts tie-break, FIFO by arrival order.
    #[test]
    fn prop_puts_only_evict_first_inserted(
        policy in policy_strategy(),
        initial_keys in prop::collection::vec(valid_key_strategy(), 3..10),
        new_key in valid_key_strategy(),
        new_value in valid_value_strategy(),
    ) {
        let unique_keys: Vec<String> = initial_keys
            .into_iter()
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        prop_assume!(unique_keys.len() >= 2);
        prop_assume!(!unique_keys.contains(&new_key));

        let capacity = unique_keys.len();
        let mut store = test_cache(capacity, policy);

        let oldest_key = unique_keys[0].clone();
        for key in &unique_keys {
            store.put(key.clone(), format!("value_{}", key), None);
        }

        prop_assert_eq!(store.len(), capacity, "Cache should be at capacity");

        store.put(new_key.clone(), new_value, None);

        prop_assert_eq!(store.len(), capacity, "Cache should remain at capacity after eviction");
        prop_assert!(
            store.get(&oldest_key).is_none(),
            "Oldest key '{}' should have been evicted",
            oldest_key
        );
        prop_assert!(
            store.get(&new_key).is_some(),
            "New key '{}' should exist after insertion",
            new_key
        );

        for key in unique_keys.iter().skip(1) {
            prop_assert!(
                store.get(key).is_some(),
                "Key '{}' should still exist (not the oldest)",
                key
            );
        }
    }

    // LRU access tracking: touching the eviction candidate via get shifts
    // eviction onto the next least recently used key.
    #[test]
    fn prop_lru_access_tracking(
        keys in prop::collection::vec(valid_key_strategy(), 3..8),
        new_key in valid_key_strategy(),
        new_value in valid_value_strategy(),
    ) {
        let unique_keys: Vec<String> = keys
            .into_iter()
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        prop_assume!(unique_keys.len() >= 3);
        prop_assume!(!unique_keys.contains(&new_key));

        let capacity = unique_keys.len();
        let mut store = test_cache(capacity, EvictionPolicy::Lru);

        for key in &unique_keys {
            store.put(key.clone(), format!("value_{}", key), None);
        }

        // Touch the first key so the second becomes least recently used
        let accessed_key = unique_keys[0].clone();
        store.get(&accessed_key);
        let expected_evicted = unique_keys[1].clone();

        store.put(new_key.clone(), new_value, None);

        prop_assert!(
            store.get(&accessed_key).is_some(),
            "Accessed key '{}' should not be evicted after being touched",
            accessed_key
        );
        prop_assert!(
            store.get(&expected_evicted).is_none(),
            "Key '{}' should have been evicted as least recently used",
            expected_evicted
        );
        prop_assert!(store.get(&new_key).is_some(), "New key should exist");
    }

    // FIFO access immunity: any amount of reads never changes which key a
    // full FIFO cache evicts next.
    #[test]
    fn prop_fifo_access_never_reorders(
        keys in prop::collection::vec(valid_key_strategy(), 3..8),
        accesses in prop::collection::vec(0usize..8, 0..20),
        new_key in valid_key_strategy(),
        new_value in valid_value_strategy(),
    ) {
        let unique_keys: Vec<String> = keys
            .into_iter()
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        prop_assume!(unique_keys.len() >= 2);
        prop_assume!(!unique_keys.contains(&new_key));

        let capacity = unique_keys.len();
        let mut store = test_cache(capacity, EvictionPolicy::Fifo);

        for key in &unique_keys {
            store.put(key.clone(), format!("value_{}", key), None);
        }

        // Arbitrary read pattern over the resident keys
        for idx in accesses {
            store.get(&unique_keys[idx % unique_keys.len()]);
        }

        store.put(new_key.clone(), new_value, None);

        prop_assert!(
            store.get(&unique_keys[0]).is_none(),
            "FIFO must evict the first-inserted key regardless of reads"
        );
    }
}
