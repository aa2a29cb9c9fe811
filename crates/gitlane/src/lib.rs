// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gitlane library
//!
//! This module exports the command's configuration, output writers, and
//! the `run` pipeline for use in integration tests and as a library.

pub mod config;
pub mod output;

use std::io::{self, BufWriter, Write};

use anyhow::Context;
use gitlane_git::GitRepo;
use gitlane_layout::{apply_lane_layout, compute_lane_layout, lane_count};
use tracing::{debug, info};

use crate::config::{Config, OutputFormat};

/// Load history, lay it out, and write the result to stdout
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the repository cannot
/// be read, or stdout cannot be written.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    execute(config, &mut out)?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Load history, lay it out, and write the result to `out`
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the repository cannot
/// be read, or `out` cannot be written.
pub fn execute<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<()> {
    config.validate()?;

    let path = config.repo_path();
    let repo = GitRepo::discover(&path)
        .with_context(|| format!("failed to open repository at {}", path.display()))?;
    debug!(git_dir = %repo.path().display(), "opened repository");

    let commits = repo
        .log(&config.log_options())
        .context("failed to load commit history")?;
    let layout = compute_lane_layout(&commits);
    let placed = apply_lane_layout(&commits, &layout);
    info!(
        commits = placed.len(),
        lanes = lane_count(&layout),
        "laid out history"
    );

    match config.format {
        OutputFormat::Text => output::write_text(out, &placed, &layout)?,
        OutputFormat::Json => output::write_json(out, &placed, &layout)?,
    }
    Ok(())
}
