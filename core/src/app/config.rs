//! Configuration management (config.toml)
//!
//! Handles loading, saving, and providing defaults for settings.
//! Settings are stored in TOML format in the platform-specific config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::app::input::InputConfig;

/// Configuration file name inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Application configuration.
///
/// Serialized to/from TOML. Every field has a default, so an empty file
/// (or no file) gives the reference tuning with W/S/A/D bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Input bindings and analog tuning
    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.input.validate()
    }
}

/// Errors from reading, writing, or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid {field}: {reason}")]
    Invalid { field: String, reason: String },

    #[error("could not determine the config directory")]
    NoConfigDir,
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\analogmove\config`
/// On macOS: `~/Library/Application Support/io.analogmove.analogmove`
/// On Linux: `~/.config/analogmove`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.analogmove", "", "analogmove")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Full path of the default config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the platform config directory.
///
/// Returns defaults if the file doesn't exist. A file that exists but cannot
/// be read, parsed, or validated is logged and replaced by defaults.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                "Ignoring config at {}: {}. Using defaults.",
                path.display(),
                e
            );
            Config::default()
        }
    }
}

/// Loads and validates a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or holds
/// out-of-range values.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Saves the configuration to the platform config directory.
///
/// Creates the directory if it doesn't exist. Returns the written path.
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Saves the configuration to an explicit path, creating parent directories.
///
/// Refuses to write a config that [`load_from`] would reject.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    config.validate()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
