//! sorted-search: A binary search function handler
//!
//! Reads one request from stdin and writes one response to stdout.
//! Supported handler modes:
//! - Search: locate a target in a sorted integer sequence
//! - Echo: write every input line back
//!
//! Features:
//! - Plain-text or JSON request/response bodies
//! - Bounded request size
//! - Configuration via CLI arguments or TOML file
//! - Logs on stderr, so stdout carries only the response

mod config;
mod protocols;
mod search;

use config::Config;
use protocols::HandlerOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!(
        mode = ?config.mode,
        json = config.json,
        max_request_size = config.max_request_size,
        "Starting sorted-search handler"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(config))?;
    Ok(())
}

/// Run the configured handler over stdin and stdout
async fn run(config: Config) -> Result<(), protocols::HandlerError> {
    let options = HandlerOptions::from(&config);
    protocols::run(config.mode, options, tokio::io::stdin(), tokio::io::stdout()).await
}
