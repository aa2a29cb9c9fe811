// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Row snapshots and the drawing hints derived from them
//!
//! A [`RowSnapshot`] records which identifier occupies which lane once a row
//! has been placed. Hints for a row are a pure function of that row's
//! snapshot and the one before it; nothing here mutates allocator state.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::Lane;

/// Immutable lane occupancy at the boundary between two rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSnapshot {
    by_lane: BTreeMap<Lane, String>,
    by_oid: HashMap<String, Lane>,
}

impl RowSnapshot {
    /// Build a snapshot from a lane → identifier map
    pub(crate) fn from_occupants(by_lane: BTreeMap<Lane, String>) -> Self {
        let by_oid = by_lane
            .iter()
            .map(|(lane, oid)| (oid.clone(), *lane))
            .collect();
        Self { by_lane, by_oid }
    }

    /// Identifier reserved in `lane`, if any
    #[must_use]
    pub fn occupant(&self, lane: Lane) -> Option<&str> {
        self.by_lane.get(&lane).map(String::as_str)
    }

    /// Lane reserved for `oid`, if any
    #[must_use]
    pub fn lane_of(&self, oid: &str) -> Option<Lane> {
        self.by_oid.get(oid).copied()
    }

    /// Reserved lanes in ascending order
    pub fn lanes(&self) -> impl Iterator<Item = Lane> + '_ {
        self.by_lane.keys().copied()
    }

    /// Number of reserved lanes
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_lane.len()
    }
}

/// Drawing hints for a single row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderHints {
    /// Lanes that continue through this row
    pub active_lanes: BTreeSet<Lane>,
    /// Lane → source lane for every lane that needs a connecting curve
    pub branch_offs: BTreeMap<Lane, Lane>,
    /// Lanes that were active in the row above
    pub lanes_from_above: BTreeSet<Lane>,
}

/// Derive hints for a row whose commit sits in `own_lane`
///
/// `current` is the occupancy after this row's parents were placed and
/// `previous` the occupancy after the row above.
pub(crate) fn compute_hints(
    own_lane: Lane,
    first_parent_lane: Option<Lane>,
    current: &RowSnapshot,
    previous: &RowSnapshot,
) -> RenderHints {
    let active_lanes: BTreeSet<Lane> = current.lanes().collect();
    let mut branch_offs = BTreeMap::new();

    if let Some(parent_lane) = first_parent_lane {
        if parent_lane != own_lane {
            branch_offs.insert(own_lane, parent_lane);
        }
    }

    // An identifier that moved columns since the row above needs a curve
    // from its old lane into its new one.
    for (&lane, oid) in &current.by_lane {
        if previous.occupant(lane) == Some(oid.as_str()) {
            continue;
        }
        if let Some(from) = previous.lane_of(oid) {
            branch_offs.insert(lane, from);
        }
    }

    RenderHints {
        active_lanes,
        branch_offs,
        lanes_from_above: previous.lanes().collect(),
    }
}
