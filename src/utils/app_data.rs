use crate::index::types::TreeConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "sfx";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Reject texts longer than this many chars (0 = unlimited)
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,

    /// Colorize CLI output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Emit construction and search trace points at trace level
    #[serde(default = "default_trace")]
    pub trace: bool,

    /// Show a progress bar for texts longer than this many chars
    #[serde(default = "default_progress_threshold")]
    pub progress_threshold: usize,
}

fn default_max_text_chars() -> usize {
    0 // 0 means unlimited
}

fn default_color() -> bool {
    true
}

fn default_trace() -> bool {
    false
}

fn default_progress_threshold() -> usize {
    10_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_text_chars: default_max_text_chars(),
            color: default_color(),
            trace: default_trace(),
            progress_threshold: default_progress_threshold(),
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    /// Load config from `path`, or return default if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: AppConfig =
            serde_json::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Construction settings derived from this config
    pub fn tree_config(&self) -> TreeConfig {
        TreeConfig {
            max_text_chars: self.max_text_chars,
        }
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AppConfig {
            max_text_chars: 500,
            color: false,
            trace: true,
            progress_threshold: 42,
        };
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "trace": true }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(config.trace);
        assert!(config.color);
        assert_eq!(config.max_text_chars, 0);
        assert_eq!(config.progress_threshold, 10_000);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_tree_config() {
        let config = AppConfig {
            max_text_chars: 7,
            ..Default::default()
        };
        assert_eq!(config.tree_config().max_text_chars, 7);
    }
}
