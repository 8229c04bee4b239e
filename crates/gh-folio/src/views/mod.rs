//! View layer
//!
//! Renders from state only; every frame is a pure function of `AppState`.

pub mod browse_view;
pub mod filter_bar_view;
pub mod loading_view;
pub mod status_bar_view;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame,
};

use crate::state::{AppState, LoadingState};
use crate::view_models::{FilterBarViewModel, StatusBarViewModel};
use self::filter_bar_view::FilterBarWidget;
use self::status_bar_view::StatusBarWidget;

/// Render the whole screen
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    // Paint the base background first so theme changes cover everything
    f.render_widget(Block::default().style(state.theme.base()), area);

    // Split into filter bar, content area, and status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter bar (single row)
            Constraint::Min(0),    // Content area
            Constraint::Length(1), // Status bar (single row)
        ])
        .split(area);

    let filter_vm = FilterBarViewModel::from_state(state);
    f.render_widget(FilterBarWidget(&filter_vm), chunks[0]);

    // First load: nothing to show yet, render the loading screen
    let first_load = state.browse.cards.is_empty()
        && matches!(
            state.browse.loading_state,
            LoadingState::Idle | LoadingState::Loading
        );
    if first_load {
        loading_view::render(state, chunks[1], f);
    } else {
        browse_view::render(state, chunks[1], f);
    }

    let status_vm = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&status_vm), chunks[2]);
}
