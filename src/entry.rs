//! Cache entry with the metadata used for oldest-write eviction.

use bytes::Bytes;
use std::time::Instant;

/// A single cache entry containing the payload and its write time.
///
/// Entries are never mutated in place: an overwrite replaces the whole
/// entry, which is what refreshes `last_modified`.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The stored payload.
    pub(crate) value: Bytes,

    /// Byte length of the payload.
    pub(crate) size: usize,

    /// When this entry was created or last overwritten.
    pub(crate) last_modified: Instant,
}

impl Entry {
    /// Create a new entry stamped with the current time.
    pub fn new(value: Bytes) -> Self {
        Self::written_at(value, Instant::now())
    }

    /// Create a new entry stamped with a specific instant.
    /// This is useful for testing with a controlled clock.
    pub fn written_at(value: Bytes, last_modified: Instant) -> Self {
        Self {
            size: value.len(),
            value,
            last_modified,
        }
    }

    /// Get a reference to the payload.
    pub fn value(&self) -> &Bytes {
        &self.value
    }

    /// Get the payload length in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the time of the last write.
    pub fn last_modified(&self) -> Instant {
        self.last_modified
    }
}
