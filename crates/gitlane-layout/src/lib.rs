// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gitlane-layout: lane layout for commit graphs
//!
//! Given commits ordered newest-first (no commit before any of its
//! descendants), this crate assigns every commit a lane (column) and works
//! out which lines and curves a renderer has to draw in each row. The
//! computation is pure and synchronous; every call starts from scratch.

#![warn(missing_docs)]

//! # Example
//!
//! ```
//! use gitlane_git::Commit;
//! use gitlane_layout::{apply_lane_layout, compute_lane_layout};
//!
//! let commits = vec![
//!     Commit::new("c3", ["c2"]),
//!     Commit::new("c2", ["c1", "c0"]),
//!     Commit::new("c1", Vec::<String>::new()),
//!     Commit::new("c0", Vec::<String>::new()),
//! ];
//!
//! let layout = compute_lane_layout(&commits);
//! assert_eq!(layout["c0"].lane, 1);
//!
//! let placed = apply_lane_layout(&commits, &layout);
//! assert_eq!(placed[1].lane, Some(0));
//! ```

mod allocator;
mod hints;
pub mod indegree;
pub mod layout;
pub mod node;
mod row;

/// Column index of a vertical branch line
pub type Lane = u32;

pub use indegree::in_degrees;
pub use layout::{LaneLayout, LayoutMap, apply_lane_layout, compute_lane_layout, lane_count};
pub use node::HistoryNode;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::Lane;
    pub use crate::layout::{LaneLayout, LayoutMap, apply_lane_layout, compute_lane_layout};
    pub use crate::node::HistoryNode;
}
