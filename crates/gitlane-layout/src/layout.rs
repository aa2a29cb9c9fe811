// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Public entry points and the per-commit layout record

use std::collections::{BTreeMap, BTreeSet, HashMap};

use gitlane_git::Commit;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Lane;
use crate::hints::RowSnapshot;
use crate::indegree::in_degrees;
use crate::node::HistoryNode;
use crate::row::RowProcessor;

/// Layout records keyed by commit identifier
pub type LayoutMap = HashMap<String, LaneLayout>;

/// Where one commit sits in the graph and what to draw around it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneLayout {
    /// Lane the commit marker is drawn in
    pub lane: Lane,
    /// Lane of each parent, in the commit's parent order
    pub parent_lanes: Vec<Lane>,
    /// Lanes that need a vertical line through this row
    pub active_lanes: BTreeSet<Lane>,
    /// Lane → source lane for every connecting curve starting in this row
    pub branch_offs: BTreeMap<Lane, Lane>,
    /// The commit is a root; its line ends here
    pub has_no_parents: bool,
    /// Lanes that were active in the row above
    pub lanes_from_above: BTreeSet<Lane>,
}

impl LaneLayout {
    /// Whether a vertical line continues through `lane` in this row
    #[must_use]
    pub fn is_active(&self, lane: Lane) -> bool {
        self.active_lanes.contains(&lane)
    }

    /// Whether the row above had a line in `lane`
    #[must_use]
    pub fn continues_from_above(&self, lane: Lane) -> bool {
        self.lanes_from_above.contains(&lane)
    }

    /// Source lane of the curve into `lane`, if one starts here
    #[must_use]
    pub fn branch_source(&self, lane: Lane) -> Option<Lane> {
        self.branch_offs.get(&lane).copied()
    }

    /// One past the largest lane this row references
    #[must_use]
    pub fn width(&self) -> Lane {
        std::iter::once(self.lane)
            .chain(self.parent_lanes.iter().copied())
            .chain(self.active_lanes.iter().copied())
            .chain(self.branch_offs.iter().flat_map(|(to, from)| [*to, *from]))
            .chain(self.lanes_from_above.iter().copied())
            .max()
            .map_or(0, |lane| lane + 1)
    }
}

/// Assign every commit a lane and compute its drawing hints
///
/// `commits` must list every commit after all of its descendants (a
/// newest-first topological walk). The result is a fresh, deterministic
/// function of the input; an empty input yields an empty map.
///
/// Malformed input is not rejected. Duplicate identifiers keep the record of
/// their last occurrence, and parents that never appear as commits keep a
/// lane reserved for the rest of the computation.
#[must_use]
pub fn compute_lane_layout<N: HistoryNode>(commits: &[N]) -> LayoutMap {
    let mut rows = RowProcessor::new(in_degrees(commits));

    let (layout, last) = commits.iter().fold(
        (LayoutMap::with_capacity(commits.len()), RowSnapshot::default()),
        |(mut layout, above), commit| {
            let (record, below) = rows.place(commit, &above);
            layout.insert(commit.oid().to_string(), record);
            (layout, below)
        },
    );

    debug!(
        commits = commits.len(),
        lanes = rows.lane_count(),
        dangling = last.len(),
        "computed lane layout"
    );
    layout
}

/// Copy each commit's lane from `layout` onto the commit itself
///
/// Commits without a record get lane 0.
#[must_use]
pub fn apply_lane_layout(commits: &[Commit], layout: &LayoutMap) -> Vec<Commit> {
    commits
        .iter()
        .map(|commit| Commit {
            lane: Some(layout.get(&commit.oid).map_or(0, |record| record.lane)),
            ..commit.clone()
        })
        .collect()
}

/// Number of columns a renderer has to reserve for `layout`
#[must_use]
pub fn lane_count(layout: &LayoutMap) -> Lane {
    layout.values().map(LaneLayout::width).max().unwrap_or(0)
}
