//! Configuration management for AGX

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub handoffs: HandoffsConfig,
}

/// Extraction output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Suffix appended to the input's base name when no output path is given
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
}

pub fn default_output_suffix() -> String {
    "_clean".to_string()
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            output_suffix: default_output_suffix(),
        }
    }
}

/// Handoff directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandoffsConfig {
    /// Default handoff directory for numbered transcripts and milestones
    #[serde(default = "default_handoffs_directory")]
    pub directory: String,
}

pub fn default_handoffs_directory() -> String {
    "handoffs".to_string()
}

impl Default for HandoffsConfig {
    fn default() -> Self {
        Self {
            directory: default_handoffs_directory(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/agx/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the config directory path (~/.config/agx)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("agx"))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }
}
