//! Interactive prompt for the in-memory key-value cache.
//!
//! ```bash
//! cargo run -- --capacity 256
//! > put greeting hello
//! OK
//! > get greeting
//! hello
//! > quit
//! Bye!
//! ```

use std::process::ExitCode;

use clap::Parser;
use tokio::{io::BufReader, signal};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use kv_cache::shell::wait_for_interrupt;
use kv_cache::{Cache, Cli, Shell};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    // Logs go to stderr so stdout carries only the prompt and replies
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cache = Cache::new(args.cache_config());
    info!(capacity = cache.capacity(), "cache ready");

    let shell = Shell::new(cache).with_prompt(args.prompt);
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        result = shell.run(stdin, stdout) => match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!(error = %err, "session aborted");
                ExitCode::FAILURE
            }
        },
        _ = wait_for_interrupt(signal::ctrl_c()) => {
            info!("shutting down");
            // A pending stdin read would keep the runtime from shutting down
            std::process::exit(0)
        }
    }
}
