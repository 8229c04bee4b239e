//! Repository card grid
//!
//! Renders the visible (filtered) cards in a grid whose column count follows
//! the terminal width, with the cursor row kept on screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::state::AppState;
use crate::view_models::RepoCardViewModel;

/// Height of one card row, borders included
const CARD_HEIGHT: u16 = 7;
/// Minimum width a card needs to stay readable
const MIN_CARD_WIDTH: u16 = 40;

/// Render the card grid for the current filter selection
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let visible = state.browse.visible();

    if visible.is_empty() {
        render_empty_state(state, area, f);
        return;
    }

    let columns = (area.width / MIN_CARD_WIDTH).clamp(1, 4) as usize;
    let rows_on_screen = (area.height / CARD_HEIGHT).max(1) as usize;
    let total_rows = visible.len().div_ceil(columns);

    // Scroll so the cursor row stays on screen
    let cursor_row = state.browse.cursor.min(visible.len().saturating_sub(1)) / columns;
    let first_row = cursor_row.saturating_sub(rows_on_screen - 1);

    for (screen_row, row) in (first_row..total_rows).take(rows_on_screen).enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + screen_row as u16 * CARD_HEIGHT,
            width: area.width,
            height: CARD_HEIGHT.min(area.height.saturating_sub(screen_row as u16 * CARD_HEIGHT)),
        };
        if row_area.height < 3 {
            break;
        }

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_area);

        for column in 0..columns {
            let index = row * columns + column;
            let Some(card) = visible.get(index) else {
                break;
            };
            render_card(
                state,
                &RepoCardViewModel::from_card(card),
                index == state.browse.cursor,
                cells[column],
                f,
            );
        }
    }
}

/// Render a single repository card
fn render_card(state: &AppState, vm: &RepoCardViewModel, selected: bool, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let border_style = if selected {
        theme.card_border_selected()
    } else {
        theme.card_border()
    };

    let block = Block::bordered()
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", vm.title), theme.panel_title()));

    let mut lines: Vec<Line> = Vec::new();

    if let Some(description) = &vm.description {
        lines.push(Line::from(Span::styled(
            description.clone(),
            theme.text_secondary(),
        )));
    }

    let mut meta: Vec<Span> = Vec::new();
    if let Some(language) = &vm.language {
        meta.push(Span::styled(language.clone(), theme.muted()));
        meta.push(Span::raw("  "));
    }
    meta.push(Span::styled(vm.stars.clone(), theme.muted()));
    if let Some(homepage) = &vm.homepage {
        meta.push(Span::raw("  "));
        meta.push(Span::styled(homepage.clone(), theme.muted()));
    }
    lines.push(Line::from(meta));

    if !vm.tags.is_empty() {
        let mut tag_spans: Vec<Span> = Vec::new();
        for tag in &vm.tags {
            tag_spans.push(Span::styled(format!(" {} ", tag), theme.tag()));
            tag_spans.push(Span::raw(" "));
        }
        lines.push(Line::from(tag_spans));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Render the message shown when no repository passes the filter
fn render_empty_state(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No repositories found matching the selected technologies.",
            theme.muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("c", theme.key_hint()),
            Span::styled(" clears all filters", theme.key_description()),
        ]),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
