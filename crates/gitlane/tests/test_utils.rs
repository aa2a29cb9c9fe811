// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test utilities for gitlane integration tests
//!
//! Builds throwaway repositories with `git2` so tests do not depend on the
//! history of whatever checkout they run in.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use git2::{Oid, Repository, Signature, Time};

/// Counter for generating unique test directory names
static TEST_DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Base timestamp for generated commits (2026-01-01T00:00:00Z)
const BASE_TIME: i64 = 1_767_225_600;

/// A temporary directory that is removed when dropped
pub struct TempTestDir {
    path: PathBuf,
}

impl TempTestDir {
    pub fn new(test_name: &str) -> Self {
        let counter = TEST_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "gitlane-test-{}-{}-{}",
            test_name,
            std::process::id(),
            counter
        ));
        fs::create_dir_all(&path).expect("Failed to create temp test directory");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempTestDir {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}

/// A scratch repository with helpers for building arbitrary commit graphs
pub struct TestRepo {
    // Declared first so the repository handle closes before the directory goes
    repo: Repository,
    dir: TempTestDir,
    clock: std::cell::Cell<i64>,
}

impl TestRepo {
    pub fn new(test_name: &str) -> Self {
        let dir = TempTestDir::new(test_name);
        let repo = Repository::init(dir.path()).expect("Failed to init repository");
        Self {
            repo,
            dir,
            clock: std::cell::Cell::new(BASE_TIME),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a commit with an empty tree and the given parents
    ///
    /// Each commit is one minute newer than the previous one.
    pub fn commit(&self, message: &str, parents: &[Oid]) -> Oid {
        let seconds = self.clock.get();
        self.clock.set(seconds + 60);

        let sig = Signature::new("Test Author", "test@example.com", &Time::new(seconds, 0))
            .expect("Failed to create signature");
        let tree_id = self
            .repo
            .treebuilder(None)
            .and_then(|builder| builder.write())
            .expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");
        let parent_commits: Vec<git2::Commit<'_>> = parents
            .iter()
            .map(|oid| self.repo.find_commit(*oid).expect("Failed to find parent"))
            .collect();
        let parent_refs: Vec<&git2::Commit<'_>> = parent_commits.iter().collect();

        self.repo
            .commit(None, &sig, &sig, message, &tree, &parent_refs)
            .expect("Failed to create commit")
    }

    /// Point a branch at a commit, creating or moving it
    pub fn branch(&self, name: &str, target: Oid) {
        self.repo
            .reference(&format!("refs/heads/{name}"), target, true, "test branch")
            .expect("Failed to create branch");
    }

    /// Point HEAD at a branch
    pub fn checkout(&self, name: &str) {
        self.repo
            .set_head(&format!("refs/heads/{name}"))
            .expect("Failed to set HEAD");
    }

    /// Create an annotated tag
    pub fn tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).expect("Failed to find object");
        let sig = Signature::new("Test Author", "test@example.com", &Time::new(BASE_TIME, 0))
            .expect("Failed to create signature");
        self.repo
            .tag(name, &object, &sig, "release", false)
            .expect("Failed to create tag");
    }
}
