//! Tag filter selection
//!
//! The set of labels the viewer has toggled on. An empty selection matches
//! every repository; a non-empty selection matches when at least one of the
//! repository's labels is selected (OR across labels, not AND).

use serde::{Deserialize, Serialize};

/// Currently selected technology labels
///
/// Ordered by selection time, duplicate-free. `toggle` is idempotent per
/// label: toggling twice returns to the previous state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    labels: Vec<String>,
}

impl Selection {
    /// Toggle a label's membership
    pub fn toggle(&mut self, label: &str) {
        if let Some(pos) = self.labels.iter().position(|l| l == label) {
            self.labels.remove(pos);
        } else {
            self.labels.push(label.to_string());
        }
    }

    /// Deselect everything ("clear all")
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Does a repository with these classified labels pass the filter?
    pub fn matches(&self, labels: &[String]) -> bool {
        self.is_empty() || labels.iter().any(|l| self.contains(l))
    }
}
