use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::AppState;

/// Render the loading screen shown before the first fetch completes
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("Loading repositories...", theme.text())),
        Line::from(""),
        Line::from(Span::styled(
            format!("fetching github.com/{}", state.config.username),
            theme.muted(),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
