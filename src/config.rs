//! Configuration file support for geoclean.
//!
//! This module provides loading of `.geoclean.toml` configuration files
//! which can specify cleaning defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [cleaning]
//! format = "ddh"
//! split = true
//! axis = "lat"
//! policy = "ignore"
//! ```
//!
//! # Config File Locations
//!
//! Configuration is searched in this order (first found wins):
//! 1. `.geoclean.toml` in current directory
//! 2. `~/.config/geoclean/config.toml`
//!
//! Settings applied in code take precedence over config file settings.

use crate::batch::CleanConfig;
use crate::coord::{HorizontalAxis, OutputFormat};
use crate::policy::InvalidPolicy;
use std::fs;
use std::path::PathBuf;

/// Parsed configuration from a .geoclean.toml file.
#[derive(Debug, Clone, Default)]
pub struct GeocleanConfig {
    /// Cleaning defaults section.
    pub cleaning: CleaningSection,
}

/// Cleaning section of the config file.
#[derive(Debug, Clone, Default)]
pub struct CleaningSection {
    /// Output format alias: "dd", "ddh", "dm", or "dms".
    pub format: Option<String>,
    /// Whether pairs split into discrete fields.
    pub split: Option<bool>,
    /// Axis assumed for single coordinates: "lat" or "long".
    pub axis: Option<String>,
    /// Failure policy: "coerce" or "ignore".
    pub policy: Option<String>,
}

impl GeocleanConfig {
    /// Load configuration from the default locations.
    ///
    /// Searches for config in:
    /// 1. `.geoclean.toml` in current directory
    /// 2. `~/.config/geoclean/config.toml`
    pub fn load() -> Option<Self> {
        let cwd_config = PathBuf::from(".geoclean.toml");
        if cwd_config.exists() {
            match Self::load_from_path(&cwd_config) {
                Ok(config) => return Some(config),
                Err(e) => log::warn!("ignoring {}: {}", cwd_config.display(), e),
            }
        }

        if let Some(home) = dirs_home() {
            let home_config = home.join(".config").join("geoclean").join("config.toml");
            if home_config.exists() {
                match Self::load_from_path(&home_config) {
                    Ok(config) => return Some(config),
                    Err(e) => log::warn!("ignoring {}: {}", home_config.display(), e),
                }
            }
        }

        None
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        // Simple TOML parsing without external dependencies
        let mut config = GeocleanConfig::default();
        let mut in_cleaning = false;

        for line in content.lines() {
            let line = line.trim();

            if line.starts_with('#') || line.is_empty() {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let section = &line[1..line.len() - 1];
                in_cleaning = section == "cleaning";
                continue;
            }

            if !in_cleaning {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                match key {
                    "format" => {
                        config.cleaning.format = Some(unquote(value).to_string());
                    }
                    "split" => {
                        config.cleaning.split = match value {
                            "true" => Some(true),
                            "false" => Some(false),
                            other => {
                                return Err(ConfigError::Parse(format!(
                                    "split must be true or false, got {other:?}"
                                )))
                            }
                        };
                    }
                    "axis" => {
                        config.cleaning.axis = Some(unquote(value).to_string());
                    }
                    "policy" => {
                        config.cleaning.policy = Some(unquote(value).to_string());
                    }
                    _ => {}
                }
            }
        }

        Ok(config)
    }

    /// Convert this config to a CleanConfig, leaving unset keys at their
    /// defaults.
    pub fn to_clean_config(&self) -> CleanConfig {
        let mut config = CleanConfig::new();

        if let Some(format) = self.cleaning.format.as_deref() {
            match format.parse::<OutputFormat>() {
                Ok(format) => config = config.output_format(format),
                Err(_) => log::warn!("unknown output format {format:?} in config"),
            }
        }
        if let Some(split) = self.cleaning.split {
            config = config.split(split);
        }
        if let Some(axis) = self.cleaning.axis.as_deref() {
            match axis.parse::<HorizontalAxis>() {
                Ok(axis) => config = config.horizontal_axis(axis),
                Err(_) => log::warn!("unknown axis {axis:?} in config"),
            }
        }
        if let Some(policy) = self.cleaning.policy.as_deref() {
            match policy.parse::<InvalidPolicy>() {
                Ok(policy) => config = config.policy(policy),
                Err(_) => log::warn!("unknown policy {policy:?} in config"),
            }
        }

        config
    }
}

/// Configuration loading error.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(String),
    /// Parse error in config file.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

fn unquote(value: &str) -> &str {
    value.trim_matches('"').trim_matches('\'')
}

/// Get the user's home directory.
fn dirs_home() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
