//! Configuration file loading with precedence handling.
//!
//! Resolution order, later wins: hardcoded defaults → config file →
//! environment variables (`DESKFOLIO_*`) → CLI arguments. Each step is
//! its own function so the chain is testable link by link.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::model::Theme;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the config file (permissions, I/O).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// The config file contains invalid TOML or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional — anything unset falls back to the hardcoded
/// default. Corresponds to `~/.config/deskfolio/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Theme name ("light" or "dark").
    #[serde(default)]
    pub theme: Option<Theme>,

    /// Carousel auto-advance interval in milliseconds.
    #[serde(default)]
    pub cycle_interval_ms: Option<u64>,

    /// Length of the pause window opened by manual navigation on the
    /// phone display, in milliseconds.
    #[serde(default)]
    pub manual_resume_ms: Option<u64>,

    /// Path to a portfolio content TOML file.
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Key binding overrides, key name → action name.
    #[serde(default)]
    pub keybindings: Option<HashMap<String, String>>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Active theme at startup.
    pub theme: Theme,
    /// Carousel auto-advance interval in milliseconds.
    pub cycle_interval_ms: u64,
    /// Manual-navigation pause window for the phone display, ms.
    pub manual_resume_ms: u64,
    /// Portfolio content file, if any.
    pub content_path: Option<PathBuf>,
    /// Log file for tracing output.
    pub log_file_path: PathBuf,
    /// Key binding overrides, key name → action name.
    pub keybindings: HashMap<String, String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            cycle_interval_ms: 4000,
            manual_resume_ms: 8000,
            content_path: crate::content::default_content_path(),
            log_file_path: default_log_path(),
            keybindings: HashMap::new(),
        }
    }
}

/// Resolve the default log file path.
///
/// `~/.local/state/deskfolio/deskfolio.log` on Unix-like systems, the
/// platform equivalent elsewhere, or the current directory when no state
/// directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("deskfolio").join("deskfolio.log")
    } else {
        PathBuf::from("deskfolio.log")
    }
}

/// Resolve the default config file location:
/// `<config dir>/deskfolio/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("deskfolio").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist — missing config is not
/// an error, defaults apply. Returns `Err` if the file exists but cannot
/// be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load the config file from an explicit path, or from the default
/// location when none is given.
pub fn load_config_with_precedence(
    explicit_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    match explicit_path.or_else(default_config_path) {
        Some(path) => load_config_file(path),
        None => Ok(None),
    }
}

/// Merge an optional config file over the hardcoded defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();

    if let Some(file) = file {
        if let Some(theme) = file.theme {
            resolved.theme = theme;
        }
        if let Some(interval) = file.cycle_interval_ms {
            resolved.cycle_interval_ms = interval;
        }
        if let Some(window) = file.manual_resume_ms {
            resolved.manual_resume_ms = window;
        }
        if let Some(path) = file.content_path {
            resolved.content_path = Some(path);
        }
        if let Some(path) = file.log_file_path {
            resolved.log_file_path = path;
        }
        if let Some(bindings) = file.keybindings {
            resolved.keybindings = bindings;
        }
    }

    resolved
}

/// Apply environment variable overrides.
///
/// Recognized variables: `DESKFOLIO_THEME` (light|dark),
/// `DESKFOLIO_INTERVAL_MS` (positive integer), `DESKFOLIO_LOG_FILE`
/// (path). Unparseable values are ignored and the previous value kept.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(value) = std::env::var("DESKFOLIO_THEME") {
        if let Ok(theme) = value.parse::<Theme>() {
            config.theme = theme;
        }
    }

    if let Ok(value) = std::env::var("DESKFOLIO_INTERVAL_MS") {
        if let Ok(interval) = value.parse::<u64>() {
            if interval > 0 {
                config.cycle_interval_ms = interval;
            }
        }
    }

    if let Ok(value) = std::env::var("DESKFOLIO_LOG_FILE") {
        if !value.is_empty() {
            config.log_file_path = PathBuf::from(value);
        }
    }

    config
}

/// Apply CLI argument overrides. CLI always wins.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    theme: Option<Theme>,
    interval_ms: Option<u64>,
    content_path: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(theme) = theme {
        config.theme = theme;
    }
    if let Some(interval) = interval_ms {
        if interval > 0 {
            config.cycle_interval_ms = interval;
        }
    }
    if let Some(path) = content_path {
        config.content_path = Some(path);
    }
    config
}

// ===== Tests =====

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
