// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: reading user preferences
//! from a `settings.toml` file, and writing one to an explicit path.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[dialogs]` - Error auto-dismiss delay and confirm backdrop behavior
//! - `[logging]` - Default log filter
//!
//! # Path Resolution
//!
//! See [`crate::paths`]: explicit path, `--config-dir`, `BUDGET_DESK_CONFIG_DIR`,
//! then the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use budget_desk::config;
//! use std::path::Path;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save_to_path(&config, Path::new("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when the settings file cannot be read.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Modal dialog behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogsConfig {
    /// Close the error dialog automatically after this many seconds.
    /// Absent means the user has to press "OK".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_auto_dismiss_secs: Option<u32>,

    /// Treat a click on the confirm dialog backdrop as "Cancel".
    #[serde(
        default = "default_dismiss_on_backdrop",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_on_backdrop: Option<bool>,
}

impl Default for DialogsConfig {
    fn default() -> Self {
        Self {
            error_auto_dismiss_secs: None,
            dismiss_on_backdrop: default_dismiss_on_backdrop(),
        }
    }
}

impl DialogsConfig {
    /// Auto-dismiss delay, clamped to the supported range.
    #[must_use]
    pub fn error_auto_dismiss(&self) -> Option<Duration> {
        self.error_auto_dismiss_secs.map(|secs| {
            let secs = secs.clamp(MIN_ERROR_AUTO_DISMISS_SECS, MAX_ERROR_AUTO_DISMISS_SECS);
            Duration::from_secs(u64::from(secs))
        })
    }

    #[must_use]
    pub fn dismiss_on_backdrop(&self) -> bool {
        self.dismiss_on_backdrop
            .unwrap_or(DEFAULT_DISMISS_ON_BACKDROP)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `"debug"` or `"budget_desk=trace"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl LoggingConfig {
    #[must_use]
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub dialogs: DialogsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_dismiss_on_backdrop() -> Option<bool> {
    Some(DEFAULT_DISMISS_ON_BACKDROP)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "settings file ignored");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            dialogs: DialogsConfig {
                error_auto_dismiss_secs: Some(8),
                dismiss_on_backdrop: Some(false),
            },
            logging: LoggingConfig {
                level: Some("debug".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_returns_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[general]\ntheme_mode = \"dark\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert!(loaded.dialogs.dismiss_on_backdrop());
        assert_eq!(loaded.logging.level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn auto_dismiss_is_clamped() {
        let dialogs = DialogsConfig {
            error_auto_dismiss_secs: Some(600),
            ..DialogsConfig::default()
        };
        assert_eq!(
            dialogs.error_auto_dismiss(),
            Some(Duration::from_secs(u64::from(MAX_ERROR_AUTO_DISMISS_SECS)))
        );

        let dialogs = DialogsConfig {
            error_auto_dismiss_secs: Some(0),
            ..DialogsConfig::default()
        };
        assert_eq!(
            dialogs.error_auto_dismiss(),
            Some(Duration::from_secs(u64::from(MIN_ERROR_AUTO_DISMISS_SECS)))
        );
    }

    #[test]
    fn default_config_has_no_auto_dismiss() {
        let config = Config::default();
        assert!(config.dialogs.error_auto_dismiss().is_none());
        assert!(config.dialogs.dismiss_on_backdrop());
    }
}
