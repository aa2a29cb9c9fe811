// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Child counts per commit, computed before any row is placed

use std::collections::HashMap;

use crate::node::HistoryNode;

/// Count, for every identifier in `nodes`, how many entries name it as a parent
///
/// Both commits and parent references get an entry; a commit nobody names
/// as a parent maps to zero. A parent listed twice by the same child counts
/// twice.
#[must_use]
pub fn in_degrees<N: HistoryNode>(nodes: &[N]) -> HashMap<String, usize> {
    let mut degrees: HashMap<String, usize> = HashMap::with_capacity(nodes.len());

    for node in nodes {
        degrees.entry(node.oid().to_string()).or_insert(0);
        for parent in node.parent_oids() {
            *degrees.entry(parent.clone()).or_insert(0) += 1;
        }
    }

    degrees
}
