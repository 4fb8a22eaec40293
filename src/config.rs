//! Configuration for the evprobe CLI
//!
//! Stored as TOML at `~/.config/evprobe/config.toml`. Every field is
//! optional; a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Morse signaling settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorseConfig {
    /// Length of one dot in milliseconds
    #[serde(default = "default_unit_ms")]
    pub unit_ms: u64,
    /// Category of the indicator to blink
    #[serde(default = "default_category")]
    pub category: String,
    /// Indicator to blink
    #[serde(default = "default_feature")]
    pub feature: String,
}

fn default_unit_ms() -> u64 {
    120
}

fn default_category() -> String {
    "LED".to_string()
}

fn default_feature() -> String {
    "SCROLLL".to_string()
}

impl Default for MorseConfig {
    fn default() -> Self {
        Self {
            unit_ms: default_unit_ms(),
            category: default_category(),
            feature: default_feature(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Device node used when `--device` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<PathBuf>,
    /// Log filter used when neither RUST_LOG nor `--log-level` is set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub morse: MorseConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: None,
            log_level: default_log_level(),
            morse: MorseConfig::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("evprobe")
            .join("config.toml")
    }

    /// Load config from file, or defaults if the file does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
