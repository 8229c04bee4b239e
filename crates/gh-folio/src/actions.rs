//! Actions
//!
//! Every state change in the application flows through one of these actions.
//! Raw keyboard events enter as `GlobalKeyPressed` and are translated into
//! semantic actions by the keyboard middleware; async fetch results re-enter
//! through the dispatcher channel.

use gh_tech_tags::RepoRecord;
use ratatui::crossterm::event::KeyEvent;

/// Root action enum
#[derive(Debug, Clone)]
pub enum Action {
    /// Raw key event from the terminal (translated by KeyboardMiddleware)
    GlobalKeyPressed(KeyEvent),
    /// Quit the application
    GlobalQuit,

    /// One-time startup: initialize the GitHub client, then load
    BootstrapStart,

    /// Begin a fetch attempt (startup and every explicit refresh)
    ReposLoadStart,
    /// Fetch finished with the full record list
    ReposLoaded(Vec<RepoRecord>),
    /// Fetch failed; previously loaded data stays visible
    ReposLoadError(String),

    /// Toggle one technology label in the filter selection
    FilterToggle(String),
    /// Deselect all labels
    FilterClear,

    /// Switch between dark and light theme (persisted)
    ThemeToggle,

    // Cursor movement over the visible card list
    NavNext,
    NavPrevious,
    NavToTop,
    NavToBottom,

    /// Open the selected repository's page in the browser
    OpenInBrowser,
}
