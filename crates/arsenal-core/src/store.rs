// crates/arsenal-core/src/store.rs - Command Store
//
// Whole-document persistence for CommandsFile. There is no cache: every read
// parses the file again and every write serializes the complete document.
// Writes go through a temporary file that is renamed over the target.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::model::CommandsFile;
use crate::paths::{self, PathError};

/// Errors that can occur while loading or saving the command store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read command store {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed command store {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write command store {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize command store: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Directory(#[from] PathError),
}

impl StoreError {
    /// True when the store file simply does not exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Result type for command store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Stateless reader/writer for command store documents
pub struct CommandStore;

impl CommandStore {
    /// Parse the store document at `path`
    pub fn read(path: &Path) -> StoreResult<CommandsFile> {
        debug!(path = %path.display(), "reading command store");

        let content = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace the file at `path` with the full serialization of `doc`
    pub fn write(path: &Path, doc: &CommandsFile) -> StoreResult<()> {
        debug!(path = %path.display(), groups = doc.groups.len(), "writing command store");

        paths::ensure_data_dir(path)?;
        let content = serde_json::to_vec_pretty(doc).map_err(StoreError::Serialize)?;
        paths::write_atomic(path, &content).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Copy the file at `path` to `<path>.bak`, replacing any older backup
    pub fn back_up(path: &Path) -> StoreResult<PathBuf> {
        let mut name = path.as_os_str().to_owned();
        name.push(".bak");
        let backup = PathBuf::from(name);

        debug!(path = %path.display(), backup = %backup.display(), "backing up command store");

        fs::copy(path, &backup).map_err(|source| StoreError::Write {
            path: backup.clone(),
            source,
        })?;
        Ok(backup)
    }
}
