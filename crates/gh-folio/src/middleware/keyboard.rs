use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware - converts raw keyboard events to semantic actions
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::GlobalKeyPressed(key) = action {
            handle_key_event(key, state, dispatcher);
            // Consume the raw key event (don't pass to reducer)
            return false;
        }

        // Pass all other actions through
        true
    }
}

/// Handle a key event and dispatch semantic actions
fn handle_key_event(key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
    match key.code {
        // Quit
        KeyCode::Char('q') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::GlobalQuit);
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            dispatcher.dispatch(Action::GlobalQuit);
        }
        KeyCode::Esc => {
            dispatcher.dispatch(Action::GlobalQuit);
        }

        // Refresh / retry
        KeyCode::Char('r') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::ReposLoadStart);
        }

        // Theme toggle
        KeyCode::Char('t') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::ThemeToggle);
        }

        // Clear all filters
        KeyCode::Char('c') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::FilterClear);
        }

        // Filter toggles: 1..9 address the filter bar by position
        KeyCode::Char(c @ '1'..='9') if key.modifiers == KeyModifiers::NONE => {
            let index = (c as usize) - ('1' as usize);
            if let Some(label) = state.browse.filter_labels.get(index) {
                dispatcher.dispatch(Action::FilterToggle(label.clone()));
            } else {
                log::trace!("No filter toggle at position {}", index + 1);
            }
        }

        // Vim navigation - down/next
        KeyCode::Char('j') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::NavNext);
        }
        KeyCode::Down => {
            dispatcher.dispatch(Action::NavNext);
        }

        // Vim navigation - up/previous
        KeyCode::Char('k') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::NavPrevious);
        }
        KeyCode::Up => {
            dispatcher.dispatch(Action::NavPrevious);
        }

        // Left/right walk the same rank order
        KeyCode::Char('h') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::NavPrevious);
        }
        KeyCode::Left => {
            dispatcher.dispatch(Action::NavPrevious);
        }
        KeyCode::Char('l') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::NavNext);
        }
        KeyCode::Right => {
            dispatcher.dispatch(Action::NavNext);
        }

        // Jump to start/end
        KeyCode::Char('g') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::NavToTop);
        }
        KeyCode::Char('G') if key.modifiers == KeyModifiers::SHIFT => {
            dispatcher.dispatch(Action::NavToBottom);
        }

        // Open selected repository in browser
        KeyCode::Enter => {
            dispatcher.dispatch(Action::OpenInBrowser);
        }

        // Unhandled keys
        _ => {
            log::trace!("Unhandled key: {:?}", key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_folio_config::{AppConfig, ThemeMode};
    use std::sync::mpsc;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), ThemeMode::Dark)
    }

    fn press(code: KeyCode, modifiers: KeyModifiers, state: &AppState) -> Vec<Action> {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        handle_key_event(&KeyEvent::new(code, modifiers), state, &dispatcher);
        rx.try_iter().collect()
    }

    #[test]
    fn test_quit_keys() {
        let state = state();
        for (code, mods) in [
            (KeyCode::Char('q'), KeyModifiers::NONE),
            (KeyCode::Char('c'), KeyModifiers::CONTROL),
            (KeyCode::Esc, KeyModifiers::NONE),
        ] {
            let actions = press(code, mods, &state);
            assert!(matches!(actions[..], [Action::GlobalQuit]));
        }
    }

    #[test]
    fn test_refresh_theme_and_clear() {
        let state = state();
        assert!(matches!(
            press(KeyCode::Char('r'), KeyModifiers::NONE, &state)[..],
            [Action::ReposLoadStart]
        ));
        assert!(matches!(
            press(KeyCode::Char('t'), KeyModifiers::NONE, &state)[..],
            [Action::ThemeToggle]
        ));
        assert!(matches!(
            press(KeyCode::Char('c'), KeyModifiers::NONE, &state)[..],
            [Action::FilterClear]
        ));
    }

    #[test]
    fn test_digit_toggles_filter_by_position() {
        let state = state();
        let actions = press(KeyCode::Char('1'), KeyModifiers::NONE, &state);
        match &actions[..] {
            [Action::FilterToggle(label)] => assert_eq!(label, &state.browse.filter_labels[0]),
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_digit_beyond_filter_bar_is_ignored() {
        let mut state = state();
        state.browse.filter_labels.truncate(2);
        let actions = press(KeyCode::Char('9'), KeyModifiers::NONE, &state);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_navigation_keys() {
        let state = state();
        assert!(matches!(
            press(KeyCode::Char('j'), KeyModifiers::NONE, &state)[..],
            [Action::NavNext]
        ));
        assert!(matches!(
            press(KeyCode::Up, KeyModifiers::NONE, &state)[..],
            [Action::NavPrevious]
        ));
        assert!(matches!(
            press(KeyCode::Char('G'), KeyModifiers::SHIFT, &state)[..],
            [Action::NavToBottom]
        ));
        assert!(matches!(
            press(KeyCode::Enter, KeyModifiers::NONE, &state)[..],
            [Action::OpenInBrowser]
        ));
    }
}
