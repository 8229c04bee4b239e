//! Configuration and preference persistence for gh-folio
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Theme preference persistence (Preferences)

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod preferences;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use preferences::{Preferences, ThemeMode};
