//! Commit record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit as handed to the lane layout engine and on to a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit id (40 hex characters for SHA-1 repositories)
    pub oid: String,
    /// Author name
    pub author: String,
    /// Author email
    pub email: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
    /// First line of the commit message
    pub summary: String,
    /// Full commit message
    pub message: Option<String>,
    /// Parent commit ids, first parent first
    pub parents: Vec<String>,
    /// Branch and tag names pointing at this commit
    pub refs: Vec<String>,
    /// Graph lane, filled in once a layout has been applied
    pub lane: Option<u32>,
}

impl Commit {
    /// Create a commit with the given id and parents and empty presentation fields
    #[must_use]
    pub fn new<I, S>(oid: impl Into<String>, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            oid: oid.into(),
            author: String::new(),
            email: String::new(),
            timestamp: DateTime::<Utc>::default(),
            summary: String::new(),
            message: None,
            parents: parents.into_iter().map(Into::into).collect(),
            refs: Vec::new(),
            lane: None,
        }
    }

    /// Validate that an id is a 40-character hex string
    #[must_use]
    pub fn is_valid_oid(oid: &str) -> bool {
        oid.len() == 40 && oid.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Get the short id (first 7 characters)
    #[must_use]
    pub fn short_oid(&self) -> &str {
        self.oid.get(..7).unwrap_or(&self.oid)
    }

    /// Check if this is a merge commit (has multiple parents)
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Check if this is a root commit (has no parents)
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// The line shown next to the graph: the summary, or the first message line
    #[must_use]
    pub fn subject(&self) -> &str {
        if !self.summary.is_empty() {
            return &self.summary;
        }
        self.message
            .as_deref()
            .and_then(|m| m.lines().next())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use similar_asserts::assert_eq;

    fn sample_commit() -> Commit {
        Commit {
            oid: "1945ab9c752534e733c38ba0109dc3b741f0a6eb".to_string(),
            author: "Test Author".to_string(),
            email: "test@example.com".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 17, 2, 33, 6).unwrap(),
            summary: "feat(graph): draw merge curves".to_string(),
            message: Some("feat(graph): draw merge curves\n\nDetailed description here.".to_string()),
            parents: vec!["c460aeb7fb2d109c17e43de0ce681faec0b7374d".to_string()],
            refs: vec!["main".to_string()],
            lane: None,
        }
    }

    #[test]
    fn test_commit_serialization_roundtrip() {
        let commit = sample_commit();
        let json = serde_json::to_string(&commit).expect("serialize");
        let deserialized: Commit = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(commit, deserialized);
    }

    #[test]
    fn test_commit_json_format() {
        let commit = sample_commit();
        let json = serde_json::to_string_pretty(&commit).expect("serialize");
        assert!(json.contains("\"oid\":"));
        assert!(json.contains("1945ab9c752534e733c38ba0109dc3b741f0a6eb"));
        assert!(json.contains("\"lane\": null"));
        // chrono serializes to RFC 3339
        assert!(json.contains("2026-01-17T02:33:06Z"));
    }

    #[test]
    fn test_new_has_empty_presentation_fields() {
        let commit = Commit::new("abc", ["p1", "p2"]);
        assert_eq!(commit.oid, "abc");
        assert_eq!(commit.parents, vec!["p1".to_string(), "p2".to_string()]);
        assert!(commit.author.is_empty());
        assert!(commit.message.is_none());
        assert!(commit.refs.is_empty());
        assert_eq!(commit.lane, None);
    }

    #[test]
    fn test_is_valid_oid() {
        assert!(Commit::is_valid_oid("1945ab9c752534e733c38ba0109dc3b741f0a6eb"));
        assert!(Commit::is_valid_oid("ABCDEF1234567890abcdef1234567890abcdef12"));
        // Too short
        assert!(!Commit::is_valid_oid("1945ab9"));
        // Invalid characters
        assert!(!Commit::is_valid_oid("1945ab9c752534e733c38ba0109dc3b741f0a6eg"));
        assert!(!Commit::is_valid_oid(""));
    }

    #[test]
    fn test_short_oid() {
        let commit = sample_commit();
        assert_eq!(commit.short_oid(), "1945ab9");
    }

    #[test]
    fn test_short_oid_handles_short_input() {
        let commit = Commit::new("abc", Vec::<String>::new());
        assert_eq!(commit.short_oid(), "abc");
    }

    #[test]
    fn test_is_merge_and_is_root() {
        let merge = Commit::new("m", ["a", "b"]);
        assert!(merge.is_merge());
        assert!(!merge.is_root());

        let root = Commit::new("r", Vec::<String>::new());
        assert!(root.is_root());
        assert!(!root.is_merge());

        let plain = sample_commit();
        assert!(!plain.is_merge());
        assert!(!plain.is_root());
    }

    #[test]
    fn test_subject_prefers_summary() {
        let commit = sample_commit();
        assert_eq!(commit.subject(), "feat(graph): draw merge curves");
    }

    #[test]
    fn test_subject_falls_back_to_message() {
        let mut commit = sample_commit();
        commit.summary = String::new();
        commit.message = Some("first line\nsecond line".to_string());
        assert_eq!(commit.subject(), "first line");

        commit.message = None;
        assert_eq!(commit.subject(), "");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy to generate valid 40-character hex ids
    fn oid_strategy() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[0-9a-f]{40}").expect("valid regex")
    }

    /// Strategy to generate arbitrary Commit values
    fn commit_strategy() -> impl Strategy<Value = Commit> {
        (
            oid_strategy(),
            "[A-Za-z ]{1,50}",                                // author name
            "[a-z]+@[a-z]+\\.[a-z]+",                         // author email
            0i64..2_000_000_000i64,                           // unix seconds
            ".*",                                             // summary
            proptest::collection::vec(oid_strategy(), 0..3), // parents
            proptest::option::of(0u32..16),                   // lane
        )
            .prop_map(|(oid, author, email, ts, summary, parents, lane)| {
                let timestamp = DateTime::from_timestamp(ts, 0).unwrap_or_default();
                Commit {
                    oid,
                    author,
                    email,
                    timestamp,
                    message: Some(summary.clone()),
                    summary,
                    parents,
                    refs: Vec::new(),
                    lane,
                }
            })
    }

    proptest! {
        /// Property: Round-trip JSON serialization preserves all fields
        #[test]
        fn prop_commit_roundtrip_serialization(commit in commit_strategy()) {
            let json = serde_json::to_string(&commit).expect("serialize");
            let deserialized: Commit = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(commit, deserialized);
        }

        /// Property: short_oid returns a 7-character prefix of the id
        #[test]
        fn prop_short_oid_is_prefix(commit in commit_strategy()) {
            let short = commit.short_oid();
            prop_assert_eq!(short.len(), 7);
            prop_assert!(commit.oid.starts_with(short));
        }

        /// Property: is_merge is true iff parents.len() > 1
        #[test]
        fn prop_is_merge_iff_multiple_parents(commit in commit_strategy()) {
            prop_assert_eq!(commit.is_merge(), commit.parents.len() > 1);
        }

        /// Property: is_root is true iff parents is empty
        #[test]
        fn prop_is_root_iff_no_parents(commit in commit_strategy()) {
            prop_assert_eq!(commit.is_root(), commit.parents.is_empty());
        }
    }
}
