//! Error types for the command interface.
//!
//! The cache itself never fails: a missing key is reported as `None` and a
//! full cache evicts. These errors describe what can go wrong between the
//! user's input and the cache, which is why none of them are fatal except
//! a broken input stream.

use std::io;

use thiserror::Error;

/// The error type for the command interface.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The requested key is not stored.
    #[error("no cached entry for '{0}'")]
    KeyNotFound(String),

    /// The first field of the line is not a known command.
    #[error("unknown command: '{0}'")]
    InvalidCommand(String),

    /// A known command was given the wrong number of fields.
    #[error("'{command}' takes {expected} fields, got {got}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    /// The line contained no fields at all.
    #[error("empty command")]
    EmptyCommand,

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CacheError {
    /// Whether the session can no longer continue after this error.
    ///
    /// Only a failing input or output stream ends the session; every other
    /// variant is reported to the user and the prompt comes back.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CacheError::Io(_))
    }
}

/// A specialized Result type for command-interface operations.
pub type CacheResult<T> = Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CacheError::KeyNotFound("mykey".to_string());
        assert_eq!(format!("{}", err), "no cached entry for 'mykey'");

        let err = CacheError::InvalidCommand("foo".to_string());
        assert_eq!(format!("{}", err), "unknown command: 'foo'");

        let err = CacheError::WrongArity {
            command: "put",
            expected: 3,
            got: 2,
        };
        assert_eq!(format!("{}", err), "'put' takes 3 fields, got 2");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed");
        let cache_err: CacheError = io_err.into();
        assert!(matches!(cache_err, CacheError::Io(_)));
        assert!(cache_err.is_fatal());
    }

    #[test]
    fn test_only_io_is_fatal() {
        assert!(!CacheError::KeyNotFound("k".into()).is_fatal());
        assert!(!CacheError::InvalidCommand("x".into()).is_fatal());
        assert!(!CacheError::EmptyCommand.is_fatal());
    }
}
