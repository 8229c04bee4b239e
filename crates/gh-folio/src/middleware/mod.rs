use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod github;
pub mod keyboard;
pub mod logging;
pub mod preferences;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware may perform side effects (API calls, file I/O) and dispatch
/// follow-up actions through the dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter the chain
    ///
    /// Returns `true` to continue chain, `false` to consume the action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
