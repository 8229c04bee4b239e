//! Browse state
//!
//! The ranked, classified repository collection plus the viewer's filter
//! selection and cursor.

use chrono::{DateTime, Local};
use gh_tech_tags::{RepoRecord, Selection};

/// Data lifecycle of the repository list
///
/// Loading is entered once per explicit load request; a failed attempt leaves
/// previously loaded cards untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    /// Not started loading
    #[default]
    Idle,
    /// Fetch in flight (at most one at a time)
    Loading,
    /// Successfully loaded
    Loaded,
    /// Failed to load
    Error(String),
}

/// One repository with its derived technology labels
#[derive(Debug, Clone)]
pub struct RepoCard {
    pub record: RepoRecord,
    pub labels: Vec<String>,
}

/// State of the repository browser
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    pub loading_state: LoadingState,
    /// Ranked cards (pinned first, then newest first)
    pub cards: Vec<RepoCard>,
    /// All labels offered as filter toggles, in rule-table order
    pub filter_labels: Vec<String>,
    /// Labels the viewer has toggled on
    pub selection: Selection,
    /// Cursor index into the visible (filtered) card list
    pub cursor: usize,
    /// When the last successful fetch finished
    pub last_updated: Option<DateTime<Local>>,
}

impl BrowseState {
    /// Cards passing the current filter selection, in rank order
    pub fn visible(&self) -> Vec<&RepoCard> {
        self.cards
            .iter()
            .filter(|card| self.selection.matches(&card.labels))
            .collect()
    }

    pub fn visible_len(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| self.selection.matches(&card.labels))
            .count()
    }

    /// The card under the cursor, if any
    pub fn current_card(&self) -> Option<&RepoCard> {
        self.visible().get(self.cursor).copied()
    }
}
