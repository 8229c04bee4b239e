//! Dispatcher for middleware action dispatch
//!
//! Actions dispatched here re-enter the store from the beginning of the
//! middleware chain, which lets async fetch tasks and middleware trigger
//! follow-up work (e.g. BootstrapStart finishing with ReposLoadStart).

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions back into the store
///
/// Clones share the same channel; the main loop drains it between renders.
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher around the action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
