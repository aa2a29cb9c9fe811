//! gitlane: lane-based commit graph layout
//!
//! This binary reads a repository's history, assigns every commit a graph
//! lane, and prints the per-row layout.

use std::process::ExitCode;

use clap::Parser;
use gitlane::config::Config;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = Config::parse();

    // Initialize tracing subscriber; RUST_LOG directives override the flags
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(config.log_level().into())
                .from_env_lossy(),
        )
        .init();

    match gitlane::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
