//! Configuration for the cache.
//!
//! This module provides a builder for the one knob the cache has: the
//! maximum number of simultaneously stored entries.

/// Default capacity bound on the number of stored entries.
pub const MAX_CACHED: usize = 256;

/// Configuration for creating a new cache instance.
///
/// Use the builder pattern to construct configuration:
///
/// ```
/// use kv_cache::CacheConfig;
///
/// let config = CacheConfig::new()
///     .max_capacity(1_000)
///     .build();
/// assert_eq!(config.get_max_capacity(), 1_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold.
    /// When this limit is reached, the entry with the oldest write is evicted.
    pub(crate) max_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: MAX_CACHED,
        }
    }
}

impl CacheConfig {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum capacity of the cache.
    ///
    /// The cache is always bounded, so a capacity of 0 is raised to 1.
    pub fn max_capacity(mut self, capacity: usize) -> Self {
        self.max_capacity = capacity.max(1);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Self {
        self
    }

    /// Get the maximum capacity.
    pub fn get_max_capacity(&self) -> usize {
        self.max_capacity
    }
}
