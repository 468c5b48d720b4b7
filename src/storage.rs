//! Internal storage implementation for the cache.
//!
//! This module provides the low-level storage: an `IndexMap` of entries
//! guarded by a single mutex. Every operation, reads included, takes the
//! same exclusive lock, so all calls are linearized.

use bytes::Bytes;
use indexmap::IndexMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use tracing::{debug, trace};

use crate::config::CacheConfig;
use crate::entry::Entry;

/// Thread-safe wrapper around the internal database.
///
/// This is the internal implementation; users should use `Cache` instead.
#[derive(Debug)]
pub struct Db {
    /// The actual storage, protected by an exclusive lock.
    entries: Mutex<IndexMap<String, Entry>>,

    /// Configuration for this cache instance.
    config: CacheConfig,
}

impl Db {
    /// Create a new database with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: Mutex::new(IndexMap::with_capacity(config.max_capacity)),
            config,
        }
    }

    /// Create a new database with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist. Reading never refreshes the
    /// entry's write time.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let entries = self.lock();
        let value = entries.get(key).map(|entry| entry.value().clone());
        trace!(key, hit = value.is_some(), "get");
        value
    }

    /// Store a value, stamping it with the current time.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        self.set_entry(key.into(), value.into(), None);
    }

    /// Store a value with an explicit write time.
    /// This is useful for testing with a controlled clock.
    #[cfg(test)]
    pub(crate) fn set_at(&self, key: impl Into<String>, value: impl Into<Bytes>, at: Instant) {
        self.set_entry(key.into(), value.into(), Some(at));
    }

    /// Internal set implementation.
    ///
    /// The capacity check, the eviction and the insert all happen under one
    /// lock acquisition. The write time is taken once the lock is held, so
    /// timestamps follow the order in which writes land.
    fn set_entry(&self, key: String, value: Bytes, at: Option<Instant>) {
        let mut entries = self.lock();
        let entry = match at {
            Some(at) => Entry::written_at(value, at),
            None => Entry::new(value),
        };

        // If key already exists, we're replacing, not adding
        if !entries.contains_key(&key) && entries.len() >= self.config.max_capacity {
            Self::evict_oldest(&mut entries);
        }

        trace!(key = %key, size = entry.size(), "put");
        entries.insert(key, entry);
    }

    /// Delete a key from the cache.
    ///
    /// Returns `true` if the key existed and was removed. Deleting an absent
    /// key is a no-op.
    pub fn delete(&self, key: &str) -> bool {
        let existed = self.lock().shift_remove(key).is_some();
        if existed {
            debug!(key, "deleted entry");
        }
        existed
    }

    /// Check if a key exists in the cache.
    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    /// Get the write time of a stored key without touching it.
    pub fn last_modified(&self, key: &str) -> Option<Instant> {
        self.lock().get(key).map(Entry::last_modified)
    }

    /// Get the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.config.max_capacity
    }

    // Private helper methods

    /// Acquire the exclusive lock.
    ///
    /// A panic while holding the lock cannot leave a half-written entry
    /// behind (inserts and removals are single map calls), so a poisoned
    /// lock is recovered rather than surfaced.
    fn lock(&self) -> MutexGuard<'_, IndexMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Evict the entry with the oldest write.
    ///
    /// Linear scan over at most `max_capacity` entries. On equal timestamps
    /// the first one in iteration order wins.
    fn evict_oldest(entries: &mut IndexMap<String, Entry>) -> Option<String> {
        let key = entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_modified())
            .map(|(key, _)| key.clone())?;
        entries.shift_remove(&key);
        debug!(key = %key, "evicted oldest entry");
        Some(key)
    }
}

impl Default for Db {
    fn default() -> Self {
        Self::with_defaults()
    }
}
