//! Filter bar view model
//!
//! One toggle per known technology label, numbered by hotkey, plus a
//! clear-all hint while any filter is active.

use ratatui::style::{Color, Style};

use crate::state::AppState;

/// One rendered filter toggle
#[derive(Debug, Clone)]
pub struct FilterToggleViewModel {
    /// Display text including the hotkey, e.g. " 1 React "
    pub text: String,
    pub style: Style,
    pub width: u16,
}

/// View model for the filter bar row
#[derive(Debug, Clone)]
pub struct FilterBarViewModel {
    pub toggles: Vec<FilterToggleViewModel>,
    /// Clear-all hint, present while any filter is active
    pub hint: Option<String>,
    pub hint_style: Style,
    pub line_bg: Color,
}

impl FilterBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;

        let toggles = state
            .browse
            .filter_labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let active = state.browse.selection.contains(label);
                // Only the first nine toggles get a hotkey
                let text = if index < 9 {
                    format!(" {} {} ", index + 1, label)
                } else {
                    format!(" {} ", label)
                };
                let width = text.chars().count() as u16;
                FilterToggleViewModel {
                    text,
                    style: if active {
                        theme.filter_active()
                    } else {
                        theme.filter_inactive()
                    },
                    width,
                }
            })
            .collect();

        let hint = if state.browse.selection.is_empty() {
            None
        } else {
            Some(" c clear all ".to_string())
        };

        Self {
            toggles,
            hint,
            hint_style: theme.key_hint(),
            line_bg: theme.bg_primary,
        }
    }
}
