//! Compute Cache - a bounded in-memory memoization cache
//!
//! Avoids recomputing expensive, deterministic results by keeping them in a
//! capacity-bounded table with lazy TTL expiration and a pluggable eviction
//! policy (LRU, LFU or FIFO).
//!
//! # Usage
//!
//! ```
//! use compute_cache::{CacheConfig, ComputeCache, EvictionPolicy};
//!
//! let config = CacheConfig::new(128, Some(3600), EvictionPolicy::Lru, true)?;
//! let mut cache: ComputeCache<String> = ComputeCache::new(config);
//!
//! cache.put("fingerprint".to_string(), "result".to_string(), None);
//! assert_eq!(cache.get("fingerprint"), Some("result".to_string()));
//! # Ok::<(), compute_cache::CacheError>(())
//! ```
//!
//! # Sharing
//!
//! A cache is exclusively owned by its caller; operations take `&mut self`
//! and there is no internal locking. Embedders that share a cache across
//! threads must wrap it in their own synchronization (`Mutex`, `RwLock`, or
//! a single-owner task). Cloning a [`CacheConfig`] shares configuration
//! only; each `ComputeCache` built from it has independent state.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{ComputeCache, EvictionPolicy, StatsSnapshot};
pub use config::{CacheConfig, MemoryEstimate};
pub use error::{CacheError, Result};
