//! Main application configuration
//!
//! This module defines the primary configuration structures for the
//! chess-ratings tool, including environment variable loading, TOML files
//! and validation.

use crate::config::rating::RatingConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub data: DataSettings,
    pub rating: RatingConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name, attached to every log line as a span field
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Locations of the input record files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Registry CSV with `firstname,lastname,rating`
    pub players_path: PathBuf,
    /// Game CSV with `Date,Player 1,Player 2,Result,Rating`
    pub games_path: PathBuf,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "chess-ratings".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            players_path: PathBuf::from("players.csv"),
            games_path: PathBuf::from("data.csv"),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; environment variables still win
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| anyhow!("Invalid config file: {}", e))?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        if let Ok(path) = env::var("PLAYERS_CSV") {
            self.data.players_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("GAMES_CSV") {
            self.data.games_path = PathBuf::from(path);
        }

        if let Ok(k) = env::var("K_FACTOR_OVERRIDE") {
            self.rating.k_factor_override = Some(
                k.parse()
                    .map_err(|_| anyhow!("Invalid K_FACTOR_OVERRIDE value: {}", k))?,
            );
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.data.players_path.as_os_str().is_empty() {
        return Err(anyhow!("Players file path cannot be empty"));
    }
    if config.data.games_path.as_os_str().is_empty() {
        return Err(anyhow!("Games file path cannot be empty"));
    }

    config.rating.validate()?;

    Ok(())
}
