// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Lane reservations and recycling
//!
//! The allocator is the only owner of mutable layout state:
//!
//! - the reservation bijection between lanes and the identifiers waiting to
//!   be drawn in them,
//! - a sorted pool of lanes that were freed and may be handed out again,
//! - per-parent sets of lanes vacated by already placed children. A lane in
//!   any of these sets is never recycled, so an unrelated branch cannot take
//!   a column a pending sibling still has to merge back through.
//!
//! All inputs come from the row processor, so operations do not fail.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::Lane;
use crate::hints::RowSnapshot;

#[derive(Debug, Default)]
pub(crate) struct LaneAllocator {
    lanes: HashMap<String, Lane>,
    occupants: BTreeMap<Lane, String>,
    free: BTreeSet<Lane>,
    protected: HashMap<String, BTreeSet<Lane>>,
    /// One past the largest lane ever handed out
    next_lane: Lane,
}

impl LaneAllocator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Pick a lane for a new reservation
    ///
    /// `preferred` wins when nothing is reserved there. Otherwise the lowest
    /// recycled lane outside every protection set is used, and failing that a
    /// brand-new lane past the current maximum.
    pub(crate) fn allocate(&mut self, preferred: Option<Lane>) -> Lane {
        if let Some(lane) = preferred {
            if !self.occupants.contains_key(&lane) {
                self.free.remove(&lane);
                self.extend_to(lane);
                return lane;
            }
        }

        let recycled = self
            .free
            .iter()
            .copied()
            .find(|lane| !self.is_protected(*lane));
        if let Some(lane) = recycled {
            self.free.remove(&lane);
            return lane;
        }

        let lane = self.next_lane;
        self.extend_to(lane);
        lane
    }

    /// Return a lane to the recycle pool
    pub(crate) fn free(&mut self, lane: Lane) {
        self.free.insert(lane);
    }

    /// Reserve `lane` for `oid`
    ///
    /// Any previous reservation of either side is dropped so the mapping stays
    /// one-to-one even on malformed input.
    pub(crate) fn reserve(&mut self, oid: &str, lane: Lane) {
        if let Some(old) = self.lanes.insert(oid.to_string(), lane) {
            if old != lane {
                self.occupants.remove(&old);
            }
        }
        if let Some(evicted) = self.occupants.insert(lane, oid.to_string()) {
            if evicted != oid {
                self.lanes.remove(&evicted);
            }
        }
        self.extend_to(lane);
    }

    /// Drop the reservation held by `oid`, returning the lane it occupied
    pub(crate) fn release(&mut self, oid: &str) -> Option<Lane> {
        let lane = self.lanes.remove(oid)?;
        self.occupants.remove(&lane);
        Some(lane)
    }

    pub(crate) fn lane_of(&self, oid: &str) -> Option<Lane> {
        self.lanes.get(oid).copied()
    }

    pub(crate) fn oid_at(&self, lane: Lane) -> Option<&str> {
        self.occupants.get(&lane).map(String::as_str)
    }

    /// Keep `lane` out of recycling until `parent` is fully linked
    pub(crate) fn protect(&mut self, parent: &str, lane: Lane) {
        self.protected
            .entry(parent.to_string())
            .or_default()
            .insert(lane);
    }

    /// Forget every lane protected on behalf of `parent`
    pub(crate) fn unprotect(&mut self, parent: &str) {
        self.protected.remove(parent);
    }

    pub(crate) fn is_protected(&self, lane: Lane) -> bool {
        self.protected.values().any(|lanes| lanes.contains(&lane))
    }

    /// Number of lanes handed out so far
    pub(crate) fn lane_count(&self) -> Lane {
        self.next_lane
    }

    /// Freeze the current reservations for use as the next row's "above"
    pub(crate) fn snapshot(&self) -> RowSnapshot {
        RowSnapshot::from_occupants(self.occupants.clone())
    }

    /// Whether both directions of the reservation map agree
    #[cfg(test)]
    pub(crate) fn is_bijective(&self) -> bool {
        self.lanes.len() == self.occupants.len()
            && self
                .lanes
                .iter()
                .all(|(oid, lane)| self.oid_at(*lane) == Some(oid.as_str()))
    }

    fn extend_to(&mut self, lane: Lane) {
        self.next_lane = self.next_lane.max(lane + 1);
    }
}
