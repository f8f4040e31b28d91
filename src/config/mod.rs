// src/config/mod.rs
//! Configuration module for view defaults and logging.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::app::navigation::{Category, ViewMode};

const APP_NAME: &str = "drive-browser";

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub view: ViewConfig,
    pub log: LogConfig,
}

/// Initial view settings
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    /// "grid" or "list"
    pub mode: ViewMode,
    /// "all", "folders" or "files"
    pub category: Category,
}

/// Log output settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Log file; defaults to the platform data directory
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Parsed level, `Info` when the string is not recognised.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Where log lines go.
    pub fn file_path(&self) -> PathBuf {
        if let Some(path) = &self.file {
            return path.clone();
        }
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.data_local_dir().join(format!("{APP_NAME}.log")))
            .unwrap_or_else(|| std::env::temp_dir().join(format!("{APP_NAME}.log")))
    }
}

impl Config {
    /// Path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location. A missing file yields
    /// the defaults; an unreadable or malformed one is an error.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Read and parse a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.view.mode, ViewMode::List);
        assert_eq!(config.view.category, Category::All);
        assert_eq!(config.log.level_filter(), LevelFilter::Info);
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str("[view]\nmode = \"grid\"\n").expect("parse");
        assert_eq!(config.view.mode, ViewMode::Grid);
        assert_eq!(config.view.category, Category::All);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_full_config() {
        let toml_str = r#"
            [view]
            mode = "list"
            category = "files"

            [log]
            level = "debug"
            file = "/tmp/drive.log"
        "#;
        let config = Config::from_toml_str(toml_str).expect("parse");
        assert_eq!(config.view.category, Category::Files);
        assert_eq!(config.log.level_filter(), LevelFilter::Debug);
        assert_eq!(config.log.file_path(), PathBuf::from("/tmp/drive.log"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::from_toml_str("[view]\nmode = \"tiles\"\n").is_err());
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let log = LogConfig {
            level: "chatty".to_string(),
            file: None,
        };
        assert_eq!(log.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            view: ViewConfig {
                mode: ViewMode::Grid,
                category: Category::Folders,
            },
            log: LogConfig::default(),
        };
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized = Config::from_toml_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let path = std::env::temp_dir().join("drive-browser-missing-config.toml");
        assert!(Config::load_from(&path).is_err());
    }
}
