//! Status bar view model
//!
//! Key hints on the left, fetch status and counts on the right.

use ratatui::style::Style;

use crate::state::{AppState, LoadingState};

/// View model for the status bar row
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// (key, description) pairs rendered left to right
    pub hints: Vec<(&'static str, &'static str)>,
    pub status_text: String,
    pub status_style: Style,
    pub key_style: Style,
    pub description_style: Style,
    pub line_bg: ratatui::style::Color,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let browse = &state.browse;

        let (status_text, status_style) = match &browse.loading_state {
            LoadingState::Idle => ("starting".to_string(), theme.muted()),
            LoadingState::Loading => ("Loading repositories...".to_string(), theme.muted()),
            LoadingState::Loaded => {
                let updated = browse
                    .last_updated
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_default();
                (
                    format!(
                        "{}/{} repos | updated {}",
                        browse.visible_len(),
                        browse.cards.len(),
                        updated
                    ),
                    theme.success(),
                )
            }
            LoadingState::Error(e) => {
                // Prior data, if any, is still on screen; offer a retry
                (format!("load failed: {} (press r to retry)", e), theme.error())
            }
        };

        Self {
            hints: vec![
                ("q", "quit"),
                ("r", "refresh"),
                ("t", "theme"),
                ("1-9", "filter"),
                ("c", "clear"),
                ("enter", "open"),
            ],
            status_text,
            status_style,
            key_style: theme.key_hint(),
            description_style: theme.key_description(),
            line_bg: theme.bg_panel,
        }
    }
}
