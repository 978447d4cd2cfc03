//! Configuration for pricecast
//!
//! Locations of the dataset and model artifacts plus display settings.
//! Loaded from TOML; every field has a default, so an empty file is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::Locale;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "pricecast.toml";

/// System-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricecastConfig {
    /// Historical dataset settings
    pub dataset: DatasetConfig,
    /// Model artifact settings
    pub model: ModelConfig,
    /// Presentation settings
    pub display: DisplayConfig,
}

/// Historical dataset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the delimited dataset file
    pub path: PathBuf,
    /// Field delimiter
    pub delimiter: char,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("train_mmsc.csv"),
            delimiter: ';',
        }
    }
}

/// Model artifact configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the JSON model artifact
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("price_model.json"),
        }
    }
}

/// Presentation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Language of weekday and month labels
    pub locale: Locale,
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl PricecastConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from standard locations
    ///
    /// Uses the first that exists: `explicit`, `./pricecast.toml`,
    /// `<config dir>/pricecast/config.toml`. Falls back to defaults.
    pub fn load_standard(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        for candidate in Self::standard_paths() {
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "using config file");
                return Self::load(&candidate);
            }
        }

        Ok(Self::default())
    }

    /// Candidate config files, highest priority first
    pub fn standard_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(PROJECT_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("pricecast").join("config.toml"));
        }
        paths
    }

    /// Delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        let c = self.dataset.delimiter;
        if c.is_ascii() && !c.is_ascii_alphanumeric() && c != '"' && c != '\n' {
            Ok(c as u8)
        } else {
            Err(ConfigError::Invalid(format!(
                "dataset.delimiter must be an ASCII separator, got {:?}",
                c
            )))
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("dataset.path is empty".to_string()));
        }

        if self.model.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("model.path is empty".to_string()));
        }

        self.delimiter_byte().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PricecastConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.delimiter_byte().unwrap(), b';');
        assert_eq!(config.display.locale, Locale::English);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PricecastConfig::from_toml(
            r#"
            [dataset]
            path = "data/history.csv"

            [display]
            locale = "russian"
            "#,
        )
        .unwrap();

        assert_eq!(config.dataset.path, PathBuf::from("data/history.csv"));
        assert_eq!(config.dataset.delimiter, ';');
        assert_eq!(config.model.path, PathBuf::from("price_model.json"));
        assert_eq!(config.display.locale, Locale::Russian);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = PricecastConfig::default();
        config.dataset.delimiter = '\t';
        let parsed = PricecastConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_serialization() {
        let config = PricecastConfig::default();
        let parsed = PricecastConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed.dataset.path, config.dataset.path);
    }

    #[test]
    fn test_invalid_delimiter() {
        let mut config = PricecastConfig::default();
        config.dataset.delimiter = 'ж';
        assert!(config.validate().is_err());
        config.dataset.delimiter = 'a';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_model_path() {
        let mut config = PricecastConfig::default();
        config.model.path = PathBuf::new();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pricecast.toml");
        std::fs::write(&path, "[model]\npath = \"models/linear.json\"\n").unwrap();

        let config = PricecastConfig::load_standard(Some(&path)).unwrap();
        assert_eq!(config.model.path, PathBuf::from("models/linear.json"));
    }

    #[test]
    fn test_unknown_locale_fails_to_parse() {
        let err = PricecastConfig::from_toml("[display]\nlocale = \"klingon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
