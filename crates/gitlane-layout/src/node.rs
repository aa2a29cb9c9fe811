// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Input abstraction for the layout engine

use gitlane_git::Commit;

/// A history entry the engine can place: an identifier plus ordered parents
///
/// The first parent is the mainline continuation; later parents are merge
/// sources. Everything else about a commit is opaque to the engine.
pub trait HistoryNode {
    /// Unique identifier of this entry
    fn oid(&self) -> &str;

    /// Parent identifiers, first parent first
    fn parent_oids(&self) -> &[String];
}

impl HistoryNode for Commit {
    fn oid(&self) -> &str {
        &self.oid
    }

    fn parent_oids(&self) -> &[String] {
        &self.parents
    }
}
