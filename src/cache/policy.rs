//! Eviction Policy Module
//!
//! Defines the eviction strategies the cache can be configured with.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CacheError;

// == Eviction Policy ==
/// Strategy used to pick the victim entry when the cache is full.
///
/// The policy is parsed into this enum once, at the configuration boundary.
/// Everything downstream holds a valid variant, so a cache can never silently
/// fall back to a policy the operator did not request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionPolicy {
    /// Least Recently Used: evict the entry with the oldest access time
    #[default]
    Lru,
    /// Least Frequently Used: evict the entry with the lowest access count
    Lfu,
    /// First In, First Out: evict the oldest inserted entry, ignoring access
    Fifo,
}

impl FromStr for EvictionPolicy {
    type Err = CacheError;

    /// Parses a policy name. Accepted spellings are exactly `lru`, `lfu`
    /// and `fifo`; anything else is rejected rather than defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lru" => Ok(Self::Lru),
            "lfu" => Ok(Self::Lfu),
            "fifo" => Ok(Self::Fifo),
            other => Err(CacheError::InvalidPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lru => "lru",
            Self::Lfu => "lfu",
            Self::Fifo => "fifo",
        };
        f.write_str(name)
    }
}
