//! Error types for the memoization cache
//!
//! Provides unified error handling using thiserror.
//!
//! Errors only arise while validating a configuration. Once construction has
//! succeeded, every cache operation (`put`, `get`, `invalidate`, `clear`,
//! `stats`) is total and has no error path.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the memoization cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A configuration value fell outside its documented bounds
    #[error("Configuration out of range: {0}")]
    Range(String),

    /// An eviction policy name did not match any recognized variant
    #[error("Invalid eviction policy: '{0}' (expected one of: lru, lfu, fifo)")]
    InvalidPolicy(String),
}

// == Result Type Alias ==
/// Convenience Result type for the memoization cache.
pub type Result<T> = std::result::Result<T, CacheError>;
