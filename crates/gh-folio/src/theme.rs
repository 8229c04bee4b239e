use gh_folio_config::ThemeMode;
use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Technology tag badge colors
    pub tag_bg: Color,
    pub tag_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Theme matching a persisted mode
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c800,

            // Text
            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            // Accents
            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            // Status
            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,

            // Selection
            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,

            // Tags
            tag_bg: tailwind::SKY.c900,
            tag_fg: tailwind::SKY.c300,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            // Backgrounds
            bg_primary: tailwind::SLATE.c100,
            bg_panel: tailwind::SLATE.c200,

            // Text
            text_primary: tailwind::SLATE.c900,
            text_secondary: tailwind::SLATE.c700,
            text_muted: tailwind::SLATE.c500,

            // Accents
            accent_primary: tailwind::BLUE.c600,
            accent_secondary: tailwind::BLUE.c800,

            // Status
            status_success: tailwind::GREEN.c700,
            status_error: tailwind::RED.c700,
            status_warning: tailwind::AMBER.c700,

            // Selection
            selected_bg: tailwind::BLUE.c600,
            selected_fg: Color::White,

            // Tags
            tag_bg: tailwind::SKY.c200,
            tag_fg: tailwind::SKY.c800,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for the main background
    pub fn base(&self) -> Style {
        Style::default().bg(self.bg_primary).fg(self.text_primary)
    }

    /// Style for panel backgrounds
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the border of an unselected card
    pub fn card_border(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the border of the card under the cursor
    pub fn card_border_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for technology tag badges
    pub fn tag(&self) -> Style {
        Style::default().fg(self.tag_fg).bg(self.tag_bg)
    }

    /// Style for an active filter toggle
    pub fn filter_active(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for an inactive filter toggle
    pub fn filter_inactive(&self) -> Style {
        Style::default().fg(self.text_secondary).bg(self.bg_panel)
    }

    /// Style for key hints (e.g., "r" in "r refresh")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary text
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }
}
