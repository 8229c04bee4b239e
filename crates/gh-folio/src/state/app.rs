//! Application State

use gh_folio_config::{AppConfig, ThemeMode};
use gh_tech_tags::RuleSet;

use crate::state::BrowseState;
use crate::theme::Theme;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Current presentation mode (persisted on every toggle)
    pub theme_mode: ThemeMode,
    pub theme: Theme,
    pub browse: BrowseState,
    /// The rule table, built once at startup
    pub rules: RuleSet,
    /// Application configuration
    pub config: AppConfig,
}

impl AppState {
    /// Build the initial state from configuration and the persisted theme
    pub fn new(config: AppConfig, theme_mode: ThemeMode) -> Self {
        let rules = config.rule_set();
        let browse = BrowseState {
            filter_labels: rules.labels().iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        };

        Self {
            running: true,
            theme_mode,
            theme: Theme::for_mode(theme_mode),
            browse,
            rules,
            config,
        }
    }
}
