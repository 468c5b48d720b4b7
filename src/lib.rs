//! # KV Cache
//!
//! A bounded, thread-safe, in-process key-value cache for Rust, with an
//! interactive prompt in front of it.
//!
//! ## Features
//!
//! - **Thread-safe**: Share across threads with `Clone` (uses `Arc` internally)
//! - **Bounded**: Holds at most [`MAX_CACHED`] entries unless configured otherwise
//! - **Oldest-write eviction**: A new key arriving at capacity evicts the entry
//!   whose last `put` is oldest; reads never refresh an entry
//! - **Opaque payloads**: Values are plain bytes
//!
//! ## Quick Start
//!
//! ```rust
//! use kv_cache::{Cache, CacheConfig};
//!
//! let cache = Cache::new(CacheConfig::new().max_capacity(2).build());
//!
//! cache.put("a", "1");
//! cache.put("b", "2");
//! cache.put("c", "3"); // "a" has the oldest write and is evicted
//!
//! assert!(cache.get("a").is_none());
//! if let Some(value) = cache.get("c") {
//!     println!("Found: {:?}", value);
//! }
//! ```
//!
//! ## Thread Safety
//!
//! Every operation takes the same exclusive lock, so calls from different
//! threads are linearized. Cloning a `Cache` creates a new handle to the
//! same underlying data:
//!
//! ```rust
//! use kv_cache::Cache;
//! use std::thread;
//!
//! let cache = Cache::default();
//!
//! let handles: Vec<_> = (0..4).map(|i| {
//!     let cache = cache.clone();
//!     thread::spawn(move || {
//!         cache.put(format!("key_{}", i), format!("value_{}", i));
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 4);
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::Cache;
pub use config::{CacheConfig, MAX_CACHED};
pub use error::{CacheError, CacheResult};

// Internal modules - not part of public API
pub(crate) mod entry;
pub(crate) mod storage;

// Command-line front end
pub mod cli;
pub mod command;
pub mod shell;

pub use cli::Cli;
pub use command::{Command, Request};
pub use shell::{Reply, Shell};
