// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gitlane-git: commit history loading for gitlane
//!
//! This library crate reads commit history out of a git repository in an
//! order suitable for lane layout: no commit ever precedes one of its
//! descendants.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use gitlane_git::{GitRepo, LogOptions};
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let commits = repo.log(&LogOptions::latest(10)).expect("load history");
//!
//! for c in commits {
//!     println!("{} - {}", c.short_oid(), c.subject());
//! }
//! ```

pub mod commit;
pub mod error;
pub mod history;

pub use commit::Commit;
pub use error::GitError;
pub use history::{GitRepo, LogOptions};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::Commit;
    pub use crate::error::GitError;
    pub use crate::history::{GitRepo, LogOptions};
}
