//! The interactive command loop.
//!
//! Reads one line at a time, turns it into a [`Request`], runs it against the
//! cache and writes the reply. The loop is generic over any async reader and
//! writer so the binary drives it with stdin/stdout and tests drive it with
//! byte slices.

use bytes::Bytes;
use std::future::Future;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::cache::Cache;
use crate::command::Request;
use crate::error::{CacheError, CacheResult};

/// Default prompt shown before each line.
pub const DEFAULT_PROMPT: &str = "> ";

/// The outcome of running one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The payload stored under the requested key.
    Value(Bytes),
    /// The put was stored.
    Stored,
    /// The session should end.
    Quit,
}

impl Reply {
    /// Text written back to the user for this reply.
    pub fn render(&self) -> String {
        match self {
            Reply::Value(value) => String::from_utf8_lossy(value).into_owned(),
            Reply::Stored => "OK".to_string(),
            Reply::Quit => "Bye!".to_string(),
        }
    }
}

/// Run one parsed request against the cache.
///
/// A missing key comes back as [`CacheError::KeyNotFound`], which callers
/// report and move past.
pub fn execute(cache: &Cache, request: Request) -> CacheResult<Reply> {
    match request {
        Request::Get { key } => cache
            .get(&key)
            .map(Reply::Value)
            .ok_or(CacheError::KeyNotFound(key)),
        Request::Put { key, value } => {
            cache.put(key, value);
            Ok(Reply::Stored)
        }
        Request::Quit => Ok(Reply::Quit),
    }
}

/// Parse and run a single line of input.
///
/// The line is taken as raw bytes and need not be valid UTF-8.
pub fn dispatch(cache: &Cache, line: impl AsRef<[u8]>) -> CacheResult<Reply> {
    let request = Request::parse(line)?;
    debug!(command = %request.command(), "dispatching");
    execute(cache, request)
}

/// An interactive session bound to one cache.
#[derive(Debug, Clone)]
pub struct Shell {
    cache: Cache,
    prompt: String,
}

impl Shell {
    /// Create a session over `cache` using the default prompt.
    pub fn new(cache: Cache) -> Self {
        Self {
            cache,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Replace the prompt string.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The cache this session operates on.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Drive the session until `quit`/`exit` or end of input.
    ///
    /// Malformed lines, blank lines and missing keys are reported to `output`
    /// and the loop continues. Input is read as raw bytes, so a line that is
    /// not valid UTF-8 is still parsed. Only a failure to read input or write
    /// output ends the session with an error.
    pub async fn run<R, W>(&self, mut input: R, mut output: W) -> CacheResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(capacity = self.cache.capacity(), "session started");
        let mut line = Vec::new();

        loop {
            output.write_all(self.prompt.as_bytes()).await?;
            output.flush().await?;

            line.clear();
            if input.read_until(b'\n', &mut line).await? == 0 {
                info!("end of input, session closed");
                output.write_all(b"\n").await?;
                break;
            }

            match dispatch(&self.cache, &line) {
                Ok(Reply::Quit) => {
                    output.write_all(Reply::Quit.render().as_bytes()).await?;
                    output.write_all(b"\n").await?;
                    info!("session closed by user");
                    break;
                }
                Ok(reply) => {
                    output.write_all(reply.render().as_bytes()).await?;
                    output.write_all(b"\n").await?;
                }
                Err(CacheError::KeyNotFound(key)) => {
                    info!(key = %key, "no cached entry");
                    output.write_all(b"(nil)\n").await?;
                }
                Err(err) => {
                    debug!(
                        line = %String::from_utf8_lossy(&line).trim(),
                        error = %err,
                        "rejected input"
                    );
                    output.write_all(format!("error: {}\n", err).as_bytes()).await?;
                }
            }
        }

        output.flush().await?;
        Ok(())
    }
}

/// Resolve once `signal` reports an interrupt.
///
/// If the signal handler could not be installed the error is logged and the
/// returned future never resolves, so the session keeps running and ends
/// through `quit` or end of input instead.
pub async fn wait_for_interrupt<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("interrupt received"),
        Err(err) => {
            warn!(error = %err, "unable to listen for interrupt");
            std::future::pending::<()>().await;
        }
    }
}
