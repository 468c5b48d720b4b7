//! The main cache interface.
//!
//! This module provides the primary `Cache` type that users interact with.
//! It wraps the internal storage and provides a clean, thread-safe API.

use bytes::Bytes;
use std::sync::Arc;
use std::time::Instant;

use crate::config::CacheConfig;
use crate::storage::Db;

/// A thread-safe, bounded, in-memory cache with oldest-write eviction.
///
/// # Features
/// - **Thread-safe**: Can be safely shared across threads using `Arc<Cache>` or cloning.
/// - **Bounded**: Never holds more than the configured capacity (256 by default).
/// - **Oldest-write eviction**: When a new key arrives at capacity, the entry
///   whose last write is oldest is removed. Reads never count as activity.
///
/// # Example
/// ```
/// use kv_cache::{Cache, CacheConfig};
///
/// let cache = Cache::new(CacheConfig::new().max_capacity(2).build());
///
/// cache.put("a", "1");
/// cache.put("b", "2");
/// cache.put("c", "3"); // evicts "a"
///
/// assert!(cache.get("a").is_none());
/// assert_eq!(cache.get("b").as_deref(), Some(&b"2"[..]));
/// ```
#[derive(Debug, Clone)]
pub struct Cache {
    /// Internal storage.
    db: Arc<Db>,
}

impl Cache {
    /// Create a new cache with the given configuration.
    ///
    /// # Example
    /// ```
    /// use kv_cache::{Cache, CacheConfig};
    ///
    /// let cache = Cache::new(CacheConfig::default());
    /// assert_eq!(cache.capacity(), 256);
    /// ```
    pub fn new(config: CacheConfig) -> Self {
        Self {
            db: Arc::new(Db::new(config)),
        }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key isn't stored. The returned `Bytes` is an
    /// immutable view; the entry's write time is left untouched.
    ///
    /// # Example
    /// ```
    /// use kv_cache::Cache;
    ///
    /// let cache = Cache::default();
    /// cache.put("key", "value");
    ///
    /// match cache.get("key") {
    ///     Some(value) => println!("Found: {:?}", value),
    ///     None => println!("Not found"),
    /// }
    /// ```
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.db.get(key)
    }

    /// Store a value in the cache.
    ///
    /// Overwriting an existing key replaces its entry and refreshes its
    /// write time without changing the entry count. Storing a new key while
    /// full first evicts the entry with the oldest write. This never fails.
    ///
    /// # Example
    /// ```
    /// use kv_cache::Cache;
    ///
    /// let cache = Cache::default();
    /// cache.put("string_key", "string value");
    /// cache.put("bytes_key", vec![1, 2, 3, 4]);
    /// ```
    pub fn put(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        self.db.set(key, value);
    }

    /// Delete a key from the cache.
    ///
    /// Returns `true` if the key existed and was removed. Deleting twice is
    /// the same as deleting once.
    ///
    /// # Example
    /// ```
    /// use kv_cache::Cache;
    ///
    /// let cache = Cache::default();
    /// cache.put("key", "value");
    /// assert!(cache.delete("key"));
    /// assert!(!cache.delete("key")); // Already deleted
    /// ```
    pub fn delete(&self, key: &str) -> bool {
        self.db.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn contains(&self, key: &str) -> bool {
        self.db.contains(key)
    }

    /// Get the time `key` was last written, if it is stored.
    pub fn last_modified(&self, key: &str) -> Option<Instant> {
        self.db.last_modified(key)
    }

    /// Get the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Get the maximum number of entries the cache will hold.
    pub fn capacity(&self) -> usize {
        self.db.capacity()
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
