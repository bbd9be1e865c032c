use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::info;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::app::Route;
use crate::error::ConfigError;

pub const DEFAULT_TIME_FORMAT: &str = "%I:%M %p";

/// User-level settings, stored as JSON in the config directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sender label used for outgoing chat messages.
    pub display_name: String,
    /// `chrono` format string for the time label of sent messages.
    pub time_format: String,
    pub start_screen: Route,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            display_name: "You".to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            start_screen: Route::Home,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Reads settings from `path`. A missing file yields defaults, which are
    /// written back so the user has something to edit.
    pub fn load_or_init(path: &Path) -> Result<Settings, ConfigError> {
        if !path.exists() {
            let settings = Settings::default();
            settings.save(path)?;
            info!("Wrote default settings to {}", path.display());
            return Ok(settings);
        }

        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = serde_json::from_reader(file).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

static CONFIG_DIR_OVERRIDE: OnceCell<PathBuf> = OnceCell::new();

/// Points the settings lookup at `dir` instead of the platform config
/// directory. Only the first call has any effect.
pub fn set_config_dir_override(dir: PathBuf) {
    let _ = CONFIG_DIR_OVERRIDE.set(dir);
}

pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = CONFIG_DIR_OVERRIDE.get() {
        return Ok(dir.clone());
    }
    dirs::config_dir()
        .map(|dir| dir.join("linguaconnect"))
        .ok_or(ConfigError::NoConfigDir)
}

pub fn settings_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("settings.json"))
}

/// Loads settings from the resolved config directory.
pub fn load_settings() -> Result<Settings, ConfigError> {
    Settings::load_or_init(&settings_path()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings::load_or_init(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "display_name": "Ana", "start_screen": "chat" }"#).unwrap();

        let settings = Settings::load_or_init(&path).unwrap();
        assert_eq!(settings.display_name, "Ana");
        assert_eq!(settings.start_screen, Route::Chat);
        assert_eq!(settings.time_format, DEFAULT_TIME_FORMAT);
    }

    #[test]
    fn test_garbage_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(Settings::load_or_init(&path), Err(ConfigError::Parse { .. })));
    }
}
