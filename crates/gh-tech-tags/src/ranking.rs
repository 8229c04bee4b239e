//! Repository ranking
//!
//! Orders a repository collection: pinned names first (in pin-list order),
//! everything else by creation time, most recent first. Implemented as a
//! single composite-key stable sort, so equal keys keep their input order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::RepoRecord;

/// Ordered list of repository names to surface first, independent of recency
///
/// Names are an exact-match priority key; entries that match no fetched
/// repository are inert.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PinList {
    names: Vec<String>,
}

impl PinList {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Position of `name` in the pin list, if pinned
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<Vec<String>> for PinList {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

/// Rank repositories: pinned first, then newest first
///
/// The composite key is (pinned?, pin index, reverse creation time); the sort
/// is stable, so repositories with equal creation time and equal pin status
/// keep their relative input order.
pub fn rank(mut repos: Vec<RepoRecord>, pins: &PinList) -> Vec<RepoRecord> {
    repos.sort_by(|a, b| {
        match (pins.position(&a.name), pins.position(&b.name)) {
            (Some(a_idx), Some(b_idx)) => a_idx.cmp(&b_idx),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => b.created_at.cmp(&a.created_at),
        }
    });
    repos
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn repo(name: &str, created_secs: i64) -> RepoRecord {
        RepoRecord {
            id: created_secs as u64,
            name: name.to_string(),
            description: None,
            language: None,
            topics: Vec::new(),
            created_at: Utc.timestamp_opt(created_secs, 0).unwrap(),
            fork: false,
            private: false,
            stargazers_count: 0,
            html_url: String::new(),
            homepage: None,
        }
    }

    fn names(repos: &[RepoRecord]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_baseline_is_newest_first() {
        let ranked = rank(
            vec![repo("old", 1), repo("new", 3), repo("mid", 2)],
            &PinList::default(),
        );
        assert_eq!(names(&ranked), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_pins_precede_everything_in_pin_order() {
        // pins=["b","a"], repos a@2, c@5, b@1 => [b, a, c]
        let pins = PinList::new(vec!["b".to_string(), "a".to_string()]);
        let ranked = rank(vec![repo("a", 2), repo("c", 5), repo("b", 1)], &pins);
        assert_eq!(names(&ranked), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_pin_order_beats_recency_among_pinned() {
        let pins = PinList::new(vec!["oldest".to_string(), "newest".to_string()]);
        let ranked = rank(vec![repo("newest", 9), repo("oldest", 1)], &pins);
        assert_eq!(names(&ranked), vec!["oldest", "newest"]);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let ranked = rank(
            vec![repo("first", 5), repo("second", 5), repo("third", 5)],
            &PinList::default(),
        );
        assert_eq!(names(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicate_pinned_names_keep_input_order() {
        let pins = PinList::new(vec!["twin".to_string()]);
        let mut a = repo("twin", 1);
        a.id = 100;
        let mut b = repo("twin", 9);
        b.id = 200;
        let ranked = rank(vec![a, b], &pins);
        assert_eq!(ranked[0].id, 100);
        assert_eq!(ranked[1].id, 200);
    }

    #[test]
    fn test_unmatched_pins_are_inert() {
        let pins = PinList::new(vec!["ghost".to_string()]);
        let ranked = rank(vec![repo("old", 1), repo("new", 2)], &pins);
        assert_eq!(names(&ranked), vec!["new", "old"]);
    }

    #[test]
    fn test_non_pinned_order_preserved_behind_pins() {
        let pins = PinList::new(vec!["pin".to_string()]);
        let ranked = rank(
            vec![repo("x", 1), repo("pin", 0), repo("y", 3)],
            &pins,
        );
        assert_eq!(names(&ranked), vec!["pin", "y", "x"]);
    }
}
