// Tracker configuration (tracker.toml).
//
// Every field has a default, so a missing config file is not an error;
// the file only needs to exist to override something.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    /// Origin of the stats backend serving `/api/snapshot`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Path of the local SQLite store holding the pick log.
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            api_base_url: default_api_base_url(),
            db_path: default_db_path(),
        }
    }
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_db_path() -> String {
    ProjectDirs::from("", "", "ttfl-tracker")
        .map(|dirs| dirs.data_dir().join("tracker.db").display().to_string())
        .unwrap_or_else(|| "ttfl-tracker.db".to_string())
}

/// Load config from `path`. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<TrackerConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let config = TrackerConfig::default();
            validate(&config)?;
            return Ok(config);
        }
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let config: TrackerConfig = toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate(&config)?;
    Ok(config)
}

/// Load config from the platform config directory
/// (`<config_dir>/ttfl-tracker/tracker.toml`), falling back to defaults.
pub fn load_config() -> Result<TrackerConfig, ConfigError> {
    let path = ProjectDirs::from("", "", "ttfl-tracker")
        .map(|dirs| dirs.config_dir().join("tracker.toml"))
        .unwrap_or_else(|| PathBuf::from("tracker.toml"));
    load_config_from(&path)
}

fn validate(config: &TrackerConfig) -> Result<(), ConfigError> {
    if !config.api_base_url.starts_with("http://") && !config.api_base_url.starts_with("https://")
    {
        return Err(ConfigError::Validation {
            field: "api_base_url".into(),
            message: format!("must be an http(s) origin, got `{}`", config.api_base_url),
        });
    }

    if config.db_path.is_empty() {
        return Err(ConfigError::Validation {
            field: "db_path".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}
