//! Configuration types for anonchat.
//!
//! The configuration is a JSON file. Every field has a default, so a partial
//! (or missing) file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Directory name used under the platform config and data dirs.
const APP_DIR: &str = "anonchat";

/// Main configuration for anonchat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color theme.
    #[serde(default)]
    pub theme: ThemeName,

    /// Whether the "Active Chats" sidebar is shown (on wide terminals).
    #[serde(default = "default_show_sidebar")]
    pub show_sidebar: bool,

    /// Number of mock entries listed in the sidebar.
    #[serde(default = "default_sidebar_entries")]
    pub sidebar_entries: usize,

    /// Placeholder shown in an empty composer.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Maximum visible lines of the composer before it scrolls.
    #[serde(default = "default_composer_max_lines")]
    pub composer_max_lines: u16,

    /// Log file used while the TUI owns the terminal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_show_sidebar() -> bool {
    true
}

fn default_sidebar_entries() -> usize {
    3
}

fn default_placeholder() -> String {
    "Type your message anonymously...".into()
}

fn default_composer_max_lines() -> u16 {
    5
}

/// Color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Catppuccin Mocha (dark).
    #[default]
    Mocha,
    /// Catppuccin Latte (light).
    Latte,
    /// High contrast for accessibility.
    HighContrast,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration, falling back to defaults when the file does not
    /// exist. Parse errors are still reported.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let (config, fell_back) = Self::load_with_fallback(path)?;
        if fell_back {
            warn!(path = %path.display(), "config not found, using defaults");
        }
        Ok(config)
    }

    /// Like [`Config::load_or_default`] but silent; the flag is `true` when
    /// the file was missing and defaults were used.
    pub fn load_with_fallback(path: &Path) -> Result<(Self, bool), ConfigError> {
        match Self::load(path) {
            Ok(config) => Ok((config, false)),
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok((Self::default(), true))
            }
            Err(e) => Err(e),
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Default location: `<config dir>/anonchat/config.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.json")
    }

    /// Effective log file: the configured one or `<data dir>/anonchat/anonchat.log`.
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
                .join("anonchat.log")
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            show_sidebar: default_show_sidebar(),
            sidebar_entries: default_sidebar_entries(),
            placeholder: default_placeholder(),
            composer_max_lines: default_composer_max_lines(),
            log_file: None,
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
