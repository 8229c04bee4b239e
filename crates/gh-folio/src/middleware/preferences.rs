//! Preferences middleware
//!
//! Persists the theme preference on every toggle. The reducer flips the
//! in-memory theme; this middleware mirrors the flip to disk so the next
//! start picks it up (last write wins).

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use gh_folio_config::Preferences;

pub struct PreferencesMiddleware;

impl PreferencesMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for PreferencesMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if let Action::ThemeToggle = action {
            let prefs = Preferences {
                theme: state.theme_mode.toggled(),
            };
            if let Err(e) = prefs.save() {
                // The toggle still applies for this session
                log::warn!("Failed to persist theme preference: {}", e);
            }
        }

        true // Always let the reducer apply the toggle
    }
}
