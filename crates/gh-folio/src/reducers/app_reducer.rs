//! Root reducer
//!
//! Applies application-wide actions and delegates everything touching the
//! repository list to the browse reducer.

use crate::actions::Action;
use crate::reducers::browse_reducer::reduce_browse;
use crate::state::AppState;
use crate::theme::Theme;

/// Reduce application state based on an action
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::GlobalQuit => {
            log::info!("Quit requested");
            state.running = false;
            state
        }

        Action::ThemeToggle => {
            state.theme_mode = state.theme_mode.toggled();
            state.theme = Theme::for_mode(state.theme_mode);
            log::info!("Theme switched to {}", state.theme_mode);
            state
        }

        _ => {
            state.browse = reduce_browse(state.browse, action, &state.config, &state.rules);
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_folio_config::{AppConfig, ThemeMode};

    #[test]
    fn test_quit_stops_running() {
        let state = AppState::new(AppConfig::default(), ThemeMode::Dark);
        let state = reduce(state, &Action::GlobalQuit);
        assert!(!state.running);
    }

    #[test]
    fn test_theme_toggle_flips_mode_and_palette() {
        let state = AppState::new(AppConfig::default(), ThemeMode::Dark);
        let state = reduce(state, &Action::ThemeToggle);
        assert_eq!(state.theme_mode, ThemeMode::Light);
        assert_eq!(state.theme.bg_primary, Theme::light().bg_primary);

        let state = reduce(state, &Action::ThemeToggle);
        assert_eq!(state.theme_mode, ThemeMode::Dark);
    }
}
