//! Configuration management for fuhrpark
//!
//! Config stored at: ~/.config/fuhrpark/config.json

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use fuhrpark_types::{Error, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the JSON data files (default: ./data)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("no config directory available".to_string()))?
            .join("fuhrpark");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load the configuration, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("invalid config file {}: {e}", path.display())))?;
        Ok(config)
    }

    /// Persist the configuration
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)?;
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(Self::config_path()?, raw)?;
        Ok(())
    }

    /// Effective data directory
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("data"))
    }
}
