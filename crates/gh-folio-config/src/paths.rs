//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gh-folio/`, `~/.cache/gh-folio/`
//! - macOS: `~/Library/Application Support/gh-folio/`, `~/Library/Caches/gh-folio/`
//! - Windows: `%APPDATA%\gh-folio\`, `%LOCALAPPDATA%\gh-folio\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "gh-folio";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the viewer preferences file
pub fn preferences_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("preferences.toml"))
}
