//! Command types for the interactive prompt.
//!
//! A line of input is split on ASCII whitespace; the first field names the
//! command and the rest are its arguments.

use bytes::Bytes;

use crate::error::{CacheError, CacheResult};

/// Types of commands understood by the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Get a value by key.
    Get,
    /// Store a key-value pair.
    Put,
    /// End the session.
    Quit,
    /// Invalid or unknown command.
    Invalid,
}

impl Command {
    /// Parse a command from a string.
    ///
    /// # Arguments
    /// * `s` - The command string (case-insensitive).
    ///
    /// # Returns
    /// The parsed command, or `Command::Invalid` for unknown commands.
    pub fn get(s: &str) -> Command {
        match s.to_lowercase().as_str() {
            "get" => Command::Get,
            "put" => Command::Put,
            "quit" | "exit" => Command::Quit,
            _ => Command::Invalid,
        }
    }

    /// Parse a command from a string, returning an error for invalid commands.
    pub fn parse(s: &str) -> CacheResult<Command> {
        match Self::get(s) {
            Command::Invalid => Err(CacheError::InvalidCommand(s.to_string())),
            cmd => Ok(cmd),
        }
    }

    /// Get the string representation of this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Get => "get",
            Command::Put => "put",
            Command::Quit => "quit",
            Command::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `get <key>`
    Get { key: String },
    /// `put <key> <value>`
    Put { key: String, value: Bytes },
    /// `quit` or `exit`
    Quit,
}

impl Request {
    /// Parse one line of input into a request.
    ///
    /// Fields are separated by any run of ASCII whitespace. `quit`/`exit`
    /// ends the session regardless of trailing fields; `get` and `put` must
    /// have exactly the number of fields they take. The line does not have
    /// to be valid UTF-8: keys are decoded lossily and values are kept as
    /// raw bytes.
    pub fn parse(line: impl AsRef<[u8]>) -> CacheResult<Request> {
        let fields: Vec<&[u8]> = line
            .as_ref()
            .split(u8::is_ascii_whitespace)
            .filter(|field| !field.is_empty())
            .collect();
        let first = fields.first().ok_or(CacheError::EmptyCommand)?;
        let name = String::from_utf8_lossy(first);

        match (Command::get(&name), fields.as_slice()) {
            (Command::Invalid, _) => Err(CacheError::InvalidCommand(name.into_owned())),
            (Command::Quit, _) => Ok(Request::Quit),
            (Command::Get, [_, key]) => Ok(Request::Get {
                key: String::from_utf8_lossy(key).into_owned(),
            }),
            (Command::Put, [_, key, value]) => Ok(Request::Put {
                key: String::from_utf8_lossy(key).into_owned(),
                value: Bytes::copy_from_slice(value),
            }),
            (Command::Get, fields) => Err(Self::wrong_arity(Command::Get, 2, fields.len())),
            (Command::Put, fields) => Err(Self::wrong_arity(Command::Put, 3, fields.len())),
        }
    }

    fn wrong_arity(command: Command, expected: usize, got: usize) -> CacheError {
        CacheError::WrongArity {
            command: command.as_str(),
            expected,
            got,
        }
    }

    /// The command this request was parsed from.
    pub fn command(&self) -> Command {
        match self {
            Request::Get { .. } => Command::Get,
            Request::Put { .. } => Command::Put,
            Request::Quit => Command::Quit,
        }
    }
}
