// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Writing laid-out history
//!
//! Both formats walk the commits in history order and pair each one with
//! its layout record. Commits are expected to already carry their lane.

use std::collections::BTreeMap;
use std::io::{self, Write};

use gitlane_git::Commit;
use gitlane_layout::{Lane, LaneLayout, LayoutMap};
use serde::Serialize;

/// One row of JSON output
#[derive(Debug, Serialize)]
pub struct GraphRow<'a> {
    /// The commit, including its applied lane
    pub commit: &'a Commit,
    /// Layout record for the commit
    pub layout: Option<&'a LaneLayout>,
}

/// Pair commits with their layout records in history order
#[must_use]
pub fn graph_rows<'a>(commits: &'a [Commit], layout: &'a LayoutMap) -> Vec<GraphRow<'a>> {
    commits
        .iter()
        .map(|commit| GraphRow {
            commit,
            layout: layout.get(&commit.oid),
        })
        .collect()
}

/// Write rows as a pretty-printed JSON array
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_json<W: Write>(
    out: &mut W,
    commits: &[Commit],
    layout: &LayoutMap,
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &graph_rows(commits, layout))?;
    writeln!(out).map_err(serde_json::Error::io)
}

/// Write one line per commit
///
/// ```text
/// 1945ab9  lane 0  parents [0, 1]  active [0, 1]  curves []  (main) merge feature
/// ```
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn write_text<W: Write>(
    out: &mut W,
    commits: &[Commit],
    layout: &LayoutMap,
) -> io::Result<()> {
    for commit in commits {
        write!(out, "{:<7}", commit.short_oid())?;
        match layout.get(&commit.oid) {
            Some(record) => write!(
                out,
                "  lane {}  parents [{}]  active [{}]  curves [{}]",
                record.lane,
                join_lanes(&record.parent_lanes),
                join_lanes(&record.active_lanes),
                join_curves(&record.branch_offs),
            )?,
            None => write!(out, "  lane {}", commit.lane.unwrap_or(0))?,
        }
        if !commit.refs.is_empty() {
            write!(out, "  ({})", commit.refs.join(", "))?;
        }
        writeln!(out, " {}", commit.subject())?;
    }
    Ok(())
}

fn join_lanes<'a>(lanes: impl IntoIterator<Item = &'a Lane>) -> String {
    lanes
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_curves(curves: &BTreeMap<Lane, Lane>) -> String {
    curves
        .iter()
        .map(|(to, from)| format!("{from}->{to}"))
        .collect::<Vec<_>>()
        .join(", ")
}
