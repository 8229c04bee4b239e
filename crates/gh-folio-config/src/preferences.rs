//! Viewer preference persistence
//!
//! The single persisted preference is the theme. It is read once at startup
//! and written on every toggle, last-write-wins. When no preference file
//! exists yet, the terminal's COLORFGBG signal decides the initial mode,
//! defaulting to dark.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths;

/// Light or dark presentation
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Persisted viewer preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    #[serde(default)]
    pub theme: ThemeMode,
}

impl Preferences {
    /// Load preferences, falling back to the terminal's light/dark signal
    pub fn load() -> Self {
        if let Ok(path) = paths::preferences_path() {
            if path.exists() {
                match Self::load_from_path(&path) {
                    Ok(prefs) => {
                        log::info!("Loaded preferences from {:?}", path);
                        return prefs;
                    }
                    Err(e) => {
                        log::warn!("Failed to load preferences: {}", e);
                    }
                }
            }
        }

        let prefs = Self {
            theme: detect_terminal_mode(),
        };
        log::info!("No preferences file, starting with {} theme", prefs.theme);
        prefs
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preferences file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse preferences file: {:?}", path))
    }

    /// Save preferences (written on every theme toggle)
    pub fn save(&self) -> Result<()> {
        let path = paths::preferences_path()?;
        self.save_to_path(&path)
    }

    fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize preferences")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write preferences file: {:?}", path))?;

        log::info!("Saved preferences to {:?}", path);
        Ok(())
    }
}

/// Guess the terminal's light/dark mode from COLORFGBG
///
/// COLORFGBG is "<fg>;<bg>" with ANSI color indices; a high-valued background
/// (7 or 15) means a light terminal. Absent or unparsable means dark.
fn detect_terminal_mode() -> ThemeMode {
    let Ok(value) = std::env::var("COLORFGBG") else {
        return ThemeMode::Dark;
    };

    match value.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()) {
        Some(7) | Some(15) => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_toggles_both_ways() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_theme_mode_serde() {
        assert_eq!(toml::to_string(&Preferences::default()).unwrap().trim(), r#"theme = "dark""#);

        let prefs: Preferences = toml::from_str(r#"theme = "light""#).unwrap();
        assert_eq!(prefs.theme, ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_display() {
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
        assert_eq!(ThemeMode::Light.to_string(), "light");
    }

    #[test]
    fn test_preferences_round_trip() {
        let prefs = Preferences {
            theme: ThemeMode::Light,
        };
        let toml_str = toml::to_string_pretty(&prefs).unwrap();
        let parsed: Preferences = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, prefs);
    }

    #[test]
    fn test_missing_theme_defaults_to_dark() {
        let prefs: Preferences = toml::from_str("").unwrap();
        assert_eq!(prefs.theme, ThemeMode::Dark);
    }
}
