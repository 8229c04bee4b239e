//! Application configuration
//!
//! Configuration loaded from the .gh-folio.toml file.

use gh_tech_tags::{PinList, RuleSet, TechRule};
use serde::{Deserialize, Serialize};

/// Application configuration loaded from .gh-folio.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// GitHub account whose public repositories are shown
    #[serde(default = "default_username")]
    pub username: String,

    /// Repository names surfaced first, in this order, regardless of recency
    #[serde(default)]
    pub pinned_repos: Vec<String>,

    /// Repository names never shown
    #[serde(default)]
    pub excluded_repos: Vec<String>,

    /// Whether forks are shown (the portfolio hides them by default)
    #[serde(default)]
    pub include_forks: bool,

    /// Repositories per page when fetching (GitHub caps this at 100)
    #[serde(default = "default_page_size")]
    pub page_size: u8,

    /// Upper bound on pages fetched per attempt
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Optional replacement for the built-in technology rule table
    #[serde(default)]
    pub rules: Option<Vec<TechRule>>,
}

fn default_username() -> String {
    "octocat".to_string()
}

fn default_page_size() -> u8 {
    100
}

fn default_max_pages() -> u32 {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            pinned_repos: Vec::new(),
            excluded_repos: Vec::new(),
            include_forks: false,
            page_size: default_page_size(),
            max_pages: default_max_pages(),
            rules: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// The pin list in configured order
    pub fn pin_list(&self) -> PinList {
        PinList::new(self.pinned_repos.clone())
    }

    /// Whether a repository name is on the exclusion list
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_repos.iter().any(|n| n == name)
    }

    /// The effective rule table: configured rules if valid, built-in otherwise
    pub fn rule_set(&self) -> RuleSet {
        match &self.rules {
            Some(rules) => match RuleSet::new(rules.clone()) {
                Ok(set) => set,
                Err(e) => {
                    log::warn!("Invalid [[rules]] in config, using built-in table: {}", e);
                    RuleSet::default()
                }
            },
            None => RuleSet::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.username, "octocat");
        assert!(config.pinned_repos.is_empty());
        assert!(!config.include_forks);
        assert_eq!(config.page_size, 100);
        assert_eq!(config.max_pages, 10);
        assert!(config.rules.is_none());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            username = "juanpablodiaz"
            pinned_repos = ["portfolio", "dotfiles"]
            excluded_repos = ["scratch"]
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.username, "juanpablodiaz");
        assert_eq!(config.pinned_repos, vec!["portfolio", "dotfiles"]);
        assert!(config.is_excluded("scratch"));
        assert!(!config.is_excluded("portfolio"));
        // page limits should use defaults
        assert_eq!(config.page_size, 100);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: AppConfig = toml::from_str(r#"username = "octocat""#).unwrap();
        assert_eq!(config.username, "octocat");
        assert_eq!(config.max_pages, 10);
        assert!(config.excluded_repos.is_empty());
    }

    #[test]
    fn test_configured_rules_override_builtin() {
        let toml = r#"
            username = "octocat"

            [[rules]]
            label = "Elixir"
            languages = ["elixir"]
            keywords = ["phoenix"]
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        let rules = config.rule_set();
        assert_eq!(rules.labels(), vec!["Elixir"]);
    }

    #[test]
    fn test_invalid_rules_fall_back_to_builtin() {
        let toml = r#"
            [[rules]]
            label = ""
            keywords = ["react"]
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        let rules = config.rule_set();
        assert_eq!(rules, RuleSet::default());
    }

    #[test]
    fn test_pin_list_preserves_order() {
        let config: AppConfig = toml::from_str(r#"pinned_repos = ["b", "a"]"#).unwrap();
        let pins = config.pin_list();
        assert_eq!(pins.position("b"), Some(0));
        assert_eq!(pins.position("a"), Some(1));
        assert_eq!(pins.position("c"), None);
    }
}
