// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit history loading
//!
//! This module walks a repository with the `git2` crate and produces commits
//! ordered so that every commit appears after all of its descendants, which
//! is the order the lane layout engine expects.

use std::collections::HashMap;
use std::path::Path;

use chrono::{TimeZone, Utc};
use git2::{BranchType, Oid, Repository, Sort};
use tracing::{debug, trace};

use crate::commit::Commit;
use crate::error::GitError;

/// Number of commits loaded when no limit is given
pub const DEFAULT_LOG_LIMIT: usize = 500;

/// Configuration for loading history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Maximum number of commits to retrieve (`None` walks everything)
    pub limit: Option<usize>,
    /// Start from this revision instead of every branch head
    pub from_ref: Option<String>,
    /// Also start from remote-tracking branch heads
    pub include_remotes: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            limit: Some(DEFAULT_LOG_LIMIT),
            from_ref: None,
            include_remotes: false,
        }
    }
}

impl LogOptions {
    /// Create options for loading the N most recent commits
    #[must_use]
    pub fn latest(n: usize) -> Self {
        Self {
            limit: Some(n),
            ..Default::default()
        }
    }

    /// Create options that walk the entire history
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            limit: None,
            ..Default::default()
        }
    }

    /// Set the starting revision
    #[must_use]
    pub fn from(mut self, reference: &str) -> Self {
        self.from_ref = Some(reference.to_string());
        self
    }

    /// Include remote-tracking branches in the walk and in ref decorations
    #[must_use]
    pub fn with_remotes(mut self) -> Self {
        self.include_remotes = true;
        self
    }
}

/// A git repository wrapper for loading commit history
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Check if the repository is bare
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }

    /// Get the repository path
    #[must_use]
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    /// Get the working directory path (None for bare repos)
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Load commits according to the given options
    ///
    /// Commits are sorted topologically (ties broken by time), so a commit
    /// never precedes one of its descendants. A repository without any
    /// commits yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidReference` if `from_ref` cannot be resolved,
    /// or `GitError::Git2` if the walk fails.
    pub fn log(&self, options: &LogOptions) -> Result<Vec<Commit>, GitError> {
        let starts = self.start_points(options)?;
        if starts.is_empty() {
            debug!("repository has no commits");
            return Ok(Vec::new());
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        for oid in &starts {
            revwalk.push(*oid)?;
        }

        let decorations = self.decorations(options.include_remotes)?;
        let limit = options.limit.unwrap_or(usize::MAX);
        let mut commits = Vec::new();

        for oid_result in revwalk {
            if commits.len() >= limit {
                break;
            }

            let oid = oid_result?;
            let git_commit = self.repo.find_commit(oid)?;
            let mut commit = extract_commit(&git_commit);
            if let Some(refs) = decorations.get(&oid) {
                commit.refs = refs.clone();
            }
            commits.push(commit);
        }

        debug!(
            count = commits.len(),
            starts = starts.len(),
            "loaded commit history"
        );
        Ok(commits)
    }

    /// Get the HEAD commit id
    ///
    /// # Errors
    ///
    /// Returns `GitError` if HEAD cannot be resolved.
    pub fn head_oid(&self) -> Result<String, GitError> {
        let head = self.repo.head()?;
        let oid = head.target().ok_or_else(|| GitError::InvalidReference {
            reference: "HEAD".to_string(),
        })?;
        Ok(oid.to_string())
    }

    /// Resolve the tips the walk starts from
    fn start_points(&self, options: &LogOptions) -> Result<Vec<Oid>, GitError> {
        if let Some(ref reference) = options.from_ref {
            let invalid = || GitError::InvalidReference {
                reference: reference.clone(),
            };
            let commit = self
                .repo
                .revparse_single(reference)
                .map_err(|_| invalid())?
                .peel_to_commit()
                .map_err(|_| invalid())?;
            return Ok(vec![commit.id()]);
        }

        let mut starts = self.branch_heads(BranchType::Local)?;
        if options.include_remotes {
            starts.extend(self.branch_heads(BranchType::Remote)?);
        }

        // Detached or branchless repositories still have a HEAD to show
        if starts.is_empty() {
            if let Some(oid) = self.repo.head().ok().and_then(|head| head.target()) {
                starts.push(oid);
            }
        }

        Ok(starts)
    }

    fn branch_heads(&self, kind: BranchType) -> Result<Vec<Oid>, GitError> {
        let mut heads = Vec::new();
        for branch in self.repo.branches(Some(kind))? {
            let (branch, _) = branch?;
            if let Some(oid) = branch.get().target() {
                heads.push(oid);
            }
        }
        Ok(heads)
    }

    /// Map each decorated commit to the short names of the refs pointing at it
    fn decorations(&self, include_remotes: bool) -> Result<HashMap<Oid, Vec<String>>, GitError> {
        let mut decorations: HashMap<Oid, Vec<String>> = HashMap::new();

        for reference in self.repo.references()? {
            let reference = reference?;
            let wanted = reference.is_branch()
                || reference.is_tag()
                || (include_remotes && reference.is_remote());
            if !wanted {
                continue;
            }
            let Some(name) = reference.shorthand() else {
                continue;
            };
            // origin/HEAD duplicates the branch it points at
            if name.ends_with("/HEAD") {
                continue;
            }
            // Annotated tags peel through the tag object to the commit
            let Ok(commit) = reference.peel_to_commit() else {
                trace!(name, "skipping ref that does not point at a commit");
                continue;
            };
            decorations
                .entry(commit.id())
                .or_default()
                .push(name.to_string());
        }

        for names in decorations.values_mut() {
            names.sort();
        }
        Ok(decorations)
    }
}

/// Extract commit metadata from a git2 commit
fn extract_commit(git_commit: &git2::Commit<'_>) -> Commit {
    let timestamp = Utc
        .timestamp_opt(git_commit.time().seconds(), 0)
        .single()
        .unwrap_or_default();
    let author = git_commit.author();

    Commit {
        oid: git_commit.id().to_string(),
        author: author.name().unwrap_or("Unknown").to_string(),
        email: author.email().unwrap_or("").to_string(),
        timestamp,
        summary: git_commit.summary().unwrap_or("").to_string(),
        message: git_commit.message().map(str::to_string),
        parents: git_commit.parent_ids().map(|id| id.to_string()).collect(),
        refs: Vec::new(),
        lane: None,
    }
}
