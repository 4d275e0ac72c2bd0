// crates/arsenal-core/src/paths.rs - Path Resolver
//
// Computes where the config document and the default command store live,
// relative to the user's home directory, and creates their directories.
//
// LAYOUT:
// <home>/.config/arsenal/config.json     config document
// <home>/.nuke-arsenal/commands.json     default command store
//
// The home directory is resolved once, when ArsenalPaths is built, so every
// other lookup is a pure join. Tests inject a temporary home with
// ArsenalPaths::new.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR: [&str; 2] = [".config", "arsenal"];
const CONFIG_FILE: &str = "config.json";
const DEFAULT_DATA_DIR: &str = ".nuke-arsenal";
const DEFAULT_DATA_FILE: &str = "commands.json";

/// Errors raised while resolving or creating directories
#[derive(Error, Debug)]
pub enum PathError {
    #[error("Could not determine the user's home directory")]
    HomeNotFound,

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for path operations
pub type PathResult<T> = Result<T, PathError>;

/// Canonical file locations for one installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArsenalPaths {
    home: PathBuf,
}

impl ArsenalPaths {
    /// Build paths rooted at an explicit home directory
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Build paths rooted at the current user's home directory
    pub fn from_home() -> PathResult<Self> {
        dirs::home_dir()
            .map(Self::new)
            .ok_or(PathError::HomeNotFound)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Directory dedicated to this application's configuration
    pub fn config_dir(&self) -> PathBuf {
        CONFIG_DIR
            .iter()
            .fold(self.home.clone(), |dir, part| dir.join(part))
    }

    /// Location of the config document inside [`Self::config_dir`]
    pub fn config_path(&self) -> PathBuf {
        self.config_dir().join(CONFIG_FILE)
    }

    /// Directory used for the command store when none has been configured
    pub fn default_data_dir(&self) -> PathBuf {
        self.home.join(DEFAULT_DATA_DIR)
    }

    pub fn default_data_path(&self) -> PathBuf {
        self.default_data_dir().join(DEFAULT_DATA_FILE)
    }

    /// Create the config directory and any missing ancestors
    pub fn ensure_config_dir(&self) -> PathResult<PathBuf> {
        let dir = self.config_dir();
        create_dir_all(&dir)?;
        Ok(dir)
    }
}

/// Create the directory that will hold `data_path`
///
/// Idempotent. Only directories are created, never the file itself.
pub fn ensure_data_dir(data_path: &Path) -> PathResult<()> {
    ensure_parent_dir(data_path)
}

pub(crate) fn ensure_parent_dir(path: &Path) -> PathResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dir_all(parent),
        _ => Ok(()),
    }
}

fn create_dir_all(dir: &Path) -> PathResult<()> {
    fs::create_dir_all(dir).map_err(|source| PathError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Replace `path` with `contents` in one step
///
/// The bytes go to a temporary file in the destination directory which is
/// then renamed over the target, so a reader sees either the old document or
/// the new one. The destination directory must already exist.
///
/// A symlinked `path` is resolved first and the file it points at is the one
/// replaced. The replacement keeps the permissions of the file it replaces;
/// a brand new file gets `0644` on Unix.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    match fs::metadata(&target) {
        Ok(existing) => tmp.as_file().set_permissions(existing.permissions())?,
        Err(_) => set_new_file_permissions(tmp.as_file())?,
    }
    tmp.as_file().sync_all()?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(unix)]
fn set_new_file_permissions(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_new_file_permissions(_file: &fs::File) -> io::Result<()> {
    Ok(())
}
