//! Configuration for the gitlane command
//!
//! This module provides the command-line/environment configuration and the
//! checks run on it before any history is loaded.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gitlane_git::LogOptions;
use gitlane_git::history::DEFAULT_LOG_LIMIT;

/// gitlane - lay out git history as a lane graph
#[derive(Parser, Debug, Clone)]
#[command(name = "gitlane")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path inside the repository to lay out
    ///
    /// The repository is discovered by walking up from this path.
    /// Defaults to the current working directory.
    #[arg(short, long, env = "GITLANE_REPO")]
    pub repo: Option<PathBuf>,

    /// Maximum number of commits to lay out
    #[arg(short = 'n', long, env = "GITLANE_LIMIT", default_value_t = DEFAULT_LOG_LIMIT)]
    pub limit: usize,

    /// Only lay out history reachable from this revision
    ///
    /// By default every local branch head is a starting point.
    #[arg(long)]
    pub from: Option<String>,

    /// Also start from remote-tracking branches
    #[arg(long, default_value = "false")]
    pub remotes: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the layout output.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// How the layout is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One aligned line per commit
    #[default]
    Text,
    /// A JSON array of `{ commit, layout }` rows in history order
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo: None,
            limit: DEFAULT_LOG_LIMIT,
            from: None,
            remotes: false,
            format: OutputFormat::default(),
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Get the repository search path, using the current directory as default
    #[must_use]
    pub fn repo_path(&self) -> PathBuf {
        self.repo
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// History walk options derived from the flags
    #[must_use]
    pub fn log_options(&self) -> LogOptions {
        let mut options = LogOptions::latest(self.limit);
        if let Some(ref from) = self.from {
            options = options.from(from);
        }
        if self.remotes {
            options = options.with_remotes();
        }
        options
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repository path is specified but doesn't exist or isn't a directory
    /// - The limit is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref repo) = self.repo {
            if !repo.exists() {
                return Err(ConfigError::RepoPathNotFound(repo.clone()));
            }
            if !repo.is_dir() {
                return Err(ConfigError::RepoPathNotDirectory(repo.clone()));
            }
        }

        if self.limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    RepoPathNotFound(PathBuf),

    /// Repository path is not a directory
    #[error("Repository path is not a directory: {0}")]
    RepoPathNotDirectory(PathBuf),

    /// A limit of zero would lay out nothing
    #[error("Commit limit must be at least 1")]
    ZeroLimit,
}
