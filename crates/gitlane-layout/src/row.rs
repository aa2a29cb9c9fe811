// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Per-commit placement
//!
//! Each row is resolved against the snapshot left by the row above, never
//! against reservations made earlier in the same row. Within a row:
//!
//! 1. the commit takes the lane a child reserved for it, or a new one
//!    (lane 0 for the very first commit);
//! 2. the commit's reservation is dropped;
//! 3. parents already reserved by another child keep their lane, the first
//!    unreserved parent asks for the commit's lane and the remaining ones
//!    are allocated in order of the lane they ask for;
//! 4. if no parent took over the commit's lane it is freed, protected on
//!    behalf of parents that still expect more children;
//! 5. the parents' pending child counts are decremented.

use std::collections::HashMap;

use tracing::trace;

use crate::Lane;
use crate::allocator::LaneAllocator;
use crate::hints::{RowSnapshot, compute_hints};
use crate::layout::LaneLayout;
use crate::node::HistoryNode;

pub(crate) struct RowProcessor {
    allocator: LaneAllocator,
    /// Children of each identifier that have not been placed yet
    pending_children: HashMap<String, usize>,
    rows: usize,
}

impl RowProcessor {
    pub(crate) fn new(in_degrees: HashMap<String, usize>) -> Self {
        Self {
            allocator: LaneAllocator::new(),
            pending_children: in_degrees,
            rows: 0,
        }
    }

    /// Place one commit below the row described by `above`
    ///
    /// Returns the commit's layout record and the snapshot for the next row.
    pub(crate) fn place<N: HistoryNode>(
        &mut self,
        node: &N,
        above: &RowSnapshot,
    ) -> (LaneLayout, RowSnapshot) {
        let oid = node.oid();
        let parents = node.parent_oids();
        let first_row = self.rows == 0;
        self.rows += 1;

        let lane = match above.lane_of(oid) {
            Some(lane) => lane,
            None => self.allocator.allocate(first_row.then_some(0)),
        };
        self.allocator.release(oid);

        let parent_lanes = self.place_parents(lane, parents, above);

        if self.allocator.oid_at(lane).is_none() {
            self.retire_lane(lane, parents);
        }

        for parent in parents {
            if let Some(pending) = self.pending_children.get_mut(parent.as_str()) {
                *pending = pending.saturating_sub(1);
                if *pending == 0 {
                    self.allocator.unprotect(parent);
                }
            }
        }

        let below = self.allocator.snapshot();
        let hints = compute_hints(lane, parent_lanes.first().copied(), &below, above);
        trace!(
            oid,
            lane,
            parents = parents.len(),
            active = below.len(),
            "placed row"
        );

        let record = LaneLayout {
            lane,
            parent_lanes,
            active_lanes: hints.active_lanes,
            branch_offs: hints.branch_offs,
            has_no_parents: parents.is_empty(),
            lanes_from_above: hints.lanes_from_above,
        };
        (record, below)
    }

    pub(crate) fn lane_count(&self) -> Lane {
        self.allocator.lane_count()
    }

    fn place_parents(
        &mut self,
        lane: Lane,
        parents: &[String],
        above: &RowSnapshot,
    ) -> Vec<Lane> {
        let mut placed: Vec<Option<Lane>> = vec![None; parents.len()];
        let mut merge_sources: Vec<(usize, Lane)> = Vec::new();

        for (idx, parent) in parents.iter().enumerate() {
            if let Some(existing) = above.lane_of(parent) {
                // Converge onto the column another child already opened
                self.allocator.reserve(parent, existing);
                placed[idx] = Some(existing);
            } else if idx == 0 {
                placed[idx] = Some(self.open_lane(parent, lane));
            } else {
                merge_sources.push((idx, lane));
            }
        }

        merge_sources.sort_by_key(|&(_, desired)| desired);
        for (idx, desired) in merge_sources {
            placed[idx] = Some(self.open_lane(&parents[idx], desired));
        }

        placed.into_iter().flatten().collect()
    }

    fn open_lane(&mut self, parent: &str, desired: Lane) -> Lane {
        let lane = self.allocator.allocate(Some(desired));
        self.allocator.reserve(parent, lane);
        debug_assert_eq!(self.allocator.lane_of(parent), Some(lane));
        lane
    }

    /// Free a lane no parent continues in
    fn retire_lane(&mut self, lane: Lane, parents: &[String]) {
        for parent in parents {
            match self.pending_children.get(parent.as_str()).copied() {
                Some(pending) if pending > 1 => self.allocator.protect(parent, lane),
                Some(1) => self.allocator.unprotect(parent),
                _ => {}
            }
        }
        self.allocator.free(lane);
    }

    #[cfg(test)]
    fn allocator(&self) -> &LaneAllocator {
        &self.allocator
    }
}
