//! Configuration management for the college listing.
//!
//! Handles loading and saving configuration from JSONC files.
//! Manages the dataset location, paging, banner timing, and logging.

use crate::notifier::DEFAULT_BANNER_DURATION;
use crate::query::PAGE_SIZE;
use anyhow::{Context, Result};
use dirs::{config_dir, data_local_dir};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory name used under the platform config and data directories.
const APP_DIR: &str = "college-tui";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Dataset file; the bundled dataset is used when unset
    pub dataset_path: Option<String>,
    /// Rows revealed initially and per scroll trigger
    pub page_size: usize,
    /// How long the download banner stays visible, in milliseconds
    pub banner_duration_ms: u64,
    /// Log directory (relative to the data dir or absolute)
    pub log_dir: String,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: None,
            page_size: PAGE_SIZE,
            banner_duration_ms: DEFAULT_BANNER_DURATION.as_millis() as u64,
            log_dir: "logs".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/college-tui/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| "Failed to deserialize config")?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Arguments
    /// * `path` - Path to config file
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `$XDG_CONFIG_HOME/college-tui/config.jsonc` or error
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join(APP_DIR).join("config.jsonc"))
    }

    /// Get the log directory.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Absolute `log_dir` as-is, otherwise relative to the data dir
    pub fn log_dir_path(&self) -> Result<PathBuf> {
        let log_dir = Path::new(&self.log_dir);
        if log_dir.is_absolute() {
            Ok(log_dir.to_path_buf())
        } else {
            let data_dir = data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Failed to determine data directory"))?;
            Ok(data_dir.join(APP_DIR).join(&self.log_dir))
        }
    }

    /// Configured dataset path, if any.
    pub fn dataset_path(&self) -> Option<PathBuf> {
        self.dataset_path.as_deref().map(PathBuf::from)
    }

    /// Banner visibility duration.
    pub fn banner_duration(&self) -> Duration {
        Duration::from_millis(self.banner_duration_ms)
    }
}

/// Strip `//` comments from JSONC text.
///
/// A `//` preceded by an odd number of quotes on its line is treated as
/// part of a string (escaped quotes are not handled).
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| match line.find("//") {
            Some(pos) if line[..pos].matches('"').count() % 2 == 0 => line[..pos].trim_end(),
            _ => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.dataset_path.is_none());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.banner_duration(), Duration::from_millis(2000));
    }

    #[test]
    fn test_config_missing_file_gives_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load(Some(&temp_dir.path().join("nope.jsonc"))).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.jsonc");

        let config = Config {
            dataset_path: Some("/srv/colleges.json".to_string()),
            page_size: 25,
            ..Config::default()
        };

        config.save(&config_path).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.dataset_path(), Some(PathBuf::from("/srv/colleges.json")));
    }

    #[test]
    fn test_config_jsonc_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // Dataset exported from the admissions portal
            "dataset_path": "https://not-a-comment.example/x.json",
            "banner_duration_ms": 500 // half a second
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(
            loaded.dataset_path.as_deref(),
            Some("https://not-a-comment.example/x.json")
        );
        assert_eq!(loaded.banner_duration_ms, 500);
        assert_eq!(loaded.page_size, 10);
    }

    #[test]
    fn test_log_dir_path() {
        let config = Config {
            log_dir: "/var/log/college-tui".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.log_dir_path().unwrap(),
            PathBuf::from("/var/log/college-tui")
        );
    }
}
