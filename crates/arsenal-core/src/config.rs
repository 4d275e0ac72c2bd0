// crates/arsenal-core/src/config.rs - Config Store
//
// The config document is tiny: it records which command store file is the
// active one. It is created on first run, overwritten whenever the data path
// changes, and never deleted.
//
// FORMAT (<config-dir>/config.json):
// { "dataPath": "/home/op/.nuke-arsenal/commands.json" }

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::paths::{self, PathError};

/// Errors that can occur while reading or writing the config document
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to read configuration {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in configuration {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write configuration {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Directory(#[from] PathError),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Persistent application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Absolute path of the active command store
    pub data_path: PathBuf,
}

impl Config {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }
}

/// Reads and writes the config document at a fixed location
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a config document exists and can be opened
    ///
    /// Any I/O problem counts as "no config"; this never fails.
    pub fn has_config(&self) -> bool {
        File::open(&self.path).is_ok_and(|file| file.metadata().is_ok_and(|m| m.is_file()))
    }

    /// Load and parse the config document
    pub fn read(&self) -> ConfigResult<Config> {
        debug!(path = %self.path.display(), "reading config");

        let content = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::Missing(self.path.clone())
            } else {
                ConfigError::Read {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the whole config document, creating its directory if needed
    pub fn write(&self, config: &Config) -> ConfigResult<()> {
        debug!(path = %self.path.display(), data_path = %config.data_path.display(), "writing config");

        paths::ensure_parent_dir(&self.path)?;
        let content = serde_json::to_vec_pretty(config).map_err(ConfigError::Serialize)?;
        paths::write_atomic(&self.path, &content).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
