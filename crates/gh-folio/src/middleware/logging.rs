use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - traces every action passing through the store
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Key events fire every poll tick, keep them out of debug logs
            Action::GlobalKeyPressed(key) => log::trace!("Action: GlobalKeyPressed({:?})", key),
            Action::ReposLoaded(repos) => log::debug!("Action: ReposLoaded({} repos)", repos.len()),
            other => log::debug!("Action: {:?}", other),
        }

        true
    }
}
