//! Command-line interface definitions.
//!
//! This module defines the arguments of the `kv-cache` binary using clap.

use clap::Parser;

use crate::config::{CacheConfig, MAX_CACHED};
use crate::shell::DEFAULT_PROMPT;

/// Interactive in-memory key-value cache.
///
/// Starts a prompt that accepts `put <key> <value>`, `get <key>` and
/// `quit`/`exit`. End of input (Ctrl-D) or Ctrl-C also ends the session.
#[derive(Parser, Debug)]
#[command(name = "kv-cache")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Maximum number of entries held at once.
    #[arg(long, short = 'c', env = "KV_CACHE_CAPACITY", default_value_t = MAX_CACHED)]
    pub capacity: usize,

    /// Prompt printed before each line.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Build the cache configuration described by these arguments.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::new().max_capacity(self.capacity).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["test"]);
        assert_eq!(cli.capacity, MAX_CACHED);
        assert_eq!(cli.prompt, "> ");
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_parse_capacity() {
        let cli = Cli::parse_from(["test", "--capacity", "2"]);
        assert_eq!(cli.capacity, 2);
        assert_eq!(cli.cache_config().get_max_capacity(), 2);

        let cli = Cli::parse_from(["test", "-c", "10"]);
        assert_eq!(cli.capacity, 10);
    }

    #[test]
    fn test_parse_prompt_and_log_level() {
        let cli = Cli::parse_from(["test", "--prompt", "kv> ", "--log-level", "debug"]);
        assert_eq!(cli.prompt, "kv> ");
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_rejects_non_numeric_capacity() {
        assert!(Cli::try_parse_from(["test", "--capacity", "lots"]).is_err());
    }
}
