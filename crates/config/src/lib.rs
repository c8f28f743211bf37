//! Configuration for assembling Trialrun launchers.
//!
//! Two layers live here:
//! - [`LauncherConfig`] — the in-memory value handed to the launcher factory,
//!   carrying engine and listener instances.
//! - [`LauncherSettings`] — the on-disk part, loaded from
//!   `~/.trialrun/config.toml` with environment variable overrides.

pub mod builder;

pub use builder::{LauncherConfig, LauncherConfigBuilder};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding `launcher.engine_auto_registration`.
pub const ENGINE_AUTO_REGISTRATION_ENV: &str = "TRIALRUN_ENGINE_AUTO_REGISTRATION";

/// Environment variable overriding `launcher.listener_auto_registration`.
pub const LISTENER_AUTO_REGISTRATION_ENV: &str = "TRIALRUN_LISTENER_AUTO_REGISTRATION";

/// The root settings structure.
///
/// Maps directly to `~/.trialrun/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherSettings {
    /// Launcher assembly settings
    #[serde(default)]
    pub launcher: AutoRegistrationSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoRegistrationSettings {
    /// Pick up engines from the discovery source
    #[serde(default = "default_true")]
    pub engine_auto_registration: bool,

    /// Pick up listeners from the discovery source
    #[serde(default = "default_true")]
    pub listener_auto_registration: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AutoRegistrationSettings {
    fn default() -> Self {
        Self {
            engine_auto_registration: true,
            listener_auto_registration: true,
        }
    }
}

impl LauncherSettings {
    /// Load settings from the default location, then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Self::load_from(&Self::config_dir().join("config.toml"))?;
        settings.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Load settings from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Apply overrides from `lookup`, usually the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENGINE_AUTO_REGISTRATION_ENV) {
            self.launcher.engine_auto_registration =
                parse_flag(ENGINE_AUTO_REGISTRATION_ENV, &value)?;
        }

        if let Some(value) = lookup(LISTENER_AUTO_REGISTRATION_ENV) {
            self.launcher.listener_auto_registration =
                parse_flag(LISTENER_AUTO_REGISTRATION_ENV, &value)?;
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".trialrun")
    }

    /// Seed a [`LauncherConfigBuilder`] with these settings.
    pub fn to_builder(&self) -> LauncherConfigBuilder {
        LauncherConfigBuilder::from_settings(self)
    }

    /// Generate the default settings as a TOML string.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(ConfigError::ValidationError(format!(
            "{key} must be true, false, 1 or 0 (got '{other}')"
        ))),
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigError> for trialrun_core::Error {
    fn from(err: ConfigError) -> Self {
        trialrun_core::Error::Config {
            message: err.to_string(),
        }
    }
}
