//! Configuration module for the vmlt CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the vmlt application.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VmltError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "vmlt.toml";

/// Application configuration structure.
///
/// This struct represents the complete configuration for the vmlt CLI,
/// including global settings and command-specific options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Tokenize-specific configuration.
    #[serde(default)]
    pub tokenize: TokenizeConfig,
}

/// Tokenize-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenizeConfig {
    /// Default output format for token listings (`text` or `json`).
    #[serde(default = "default_format")]
    pub format: String,

    /// Whether to append a per-kind token count summary.
    #[serde(default)]
    pub stats: bool,
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            tokenize: TokenizeConfig::default(),
        }
    }
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            stats: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - The loaded configuration or an error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(VmltError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| VmltError::Config(format!("Failed to parse configuration: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Arguments
    /// * `path` - Path where the configuration should be saved
    ///
    /// # Returns
    /// * `Result<()>` - Success or an error
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| VmltError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("vmlt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("vmlt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config() -> Config {
        Config {
            verbose: true,
            tokenize: TokenizeConfig {
                format: "json".to_string(),
                stats: true,
            },
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.tokenize.format, "text");
        assert!(!config.tokenize.stats);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let config = create_test_config();
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, VmltError::Config(_)));
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "verbose = true\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.verbose);
        assert_eq!(config.tokenize.format, "text");
    }

    #[test]
    fn test_load_malformed_config_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "verbose = {not valid").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, VmltError::Config(_)));
    }
}
