// crates/arsenal-core/src/service.rs - Arsenal Service (façade)
//
// The single entry point a presentation layer talks to. It owns the resolved
// paths, the config store, and the active data path, and implements group and
// command CRUD plus search on top of the command store.
//
// EVERY MUTATION IS READ-MODIFY-WRITE:
// 1. Load the complete document from disk
// 2. Change it in memory
// 3. Write the complete document back
//
// NO-OP CONTRACT:
// Operating on a group key that does not exist, or on a command id that does
// not exist inside an existing group, succeeds without changing anything.
// Only I/O and parse failures are reported as errors.
//
// KNOWN GAP:
// There is no cross-process locking. Two instances writing the same store
// race, and the last whole-file write wins.

use chrono::Utc;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{Config, ConfigError, ConfigStore};
use crate::model::{CommandFields, CommandsFile, Group};
use crate::paths::{self, ArsenalPaths, PathError};
use crate::search::{self, SearchResult};
use crate::store::{CommandStore, StoreError};

/// Errors surfaced to callers of [`ArsenalService`]
#[derive(Error, Debug)]
pub enum ArsenalError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No data path configured; run `init` to create the default store")]
    NotConfigured,

    #[error("Command ids exhausted in group '{group}'")]
    IdOverflow { group: String },
}

/// Result type for service operations
pub type ArsenalResult<T> = Result<T, ArsenalError>;

/// Façade over the config and command stores
///
/// Mutating methods take `&mut self` because the active data path is
/// resolved lazily and cached on first use.
#[derive(Debug)]
pub struct ArsenalService {
    paths: ArsenalPaths,
    config: ConfigStore,
    data_path: Option<PathBuf>,
}

impl ArsenalService {
    /// Create a service for the installation described by `paths`
    pub fn new(paths: ArsenalPaths) -> Self {
        let config = ConfigStore::new(paths.config_path());
        Self {
            paths,
            config,
            data_path: None,
        }
    }

    /// Create a service rooted at the current user's home directory
    pub fn from_home() -> ArsenalResult<Self> {
        Ok(Self::new(ArsenalPaths::from_home()?))
    }

    pub fn paths(&self) -> &ArsenalPaths {
        &self.paths
    }

    /// The active data path, if one has been resolved or set
    pub fn data_path(&self) -> Option<&Path> {
        self.data_path.as_deref()
    }

    // --- Config ---

    pub fn has_config(&self) -> bool {
        self.config.has_config()
    }

    pub fn get_config(&self) -> ArsenalResult<Config> {
        Ok(self.config.read()?)
    }

    /// Persist `path` as the configured store and make it active
    pub fn set_data_path(&mut self, path: impl Into<PathBuf>) -> ArsenalResult<()> {
        let config = Config::new(path);
        self.config.write(&config)?;
        self.data_path = Some(config.data_path);
        Ok(())
    }

    /// Make `path` active for this instance only, leaving the config untouched
    pub fn use_data_path(&mut self, path: impl Into<PathBuf>) {
        self.data_path = Some(path.into());
    }

    /// Bootstrap a first-run installation and return the active data path
    ///
    /// With an existing config its data path is adopted as-is and nothing is
    /// created. Otherwise a readable store at the default location is
    /// adopted, and anything else there is replaced by an empty document
    /// before a config pointing at it is written. A store that exists but
    /// does not parse is first copied to `commands.json.bak`.
    pub fn initialize_default(&mut self) -> ArsenalResult<PathBuf> {
        if self.config.has_config() {
            let config = self.config.read()?;
            self.data_path = Some(config.data_path.clone());
            return Ok(config.data_path);
        }

        let default_path = self.paths.default_data_path();
        paths::ensure_data_dir(&default_path)?;

        match CommandStore::read(&default_path) {
            Ok(_) => debug!(path = %default_path.display(), "adopting existing command store"),
            Err(err) => {
                if matches!(err, StoreError::Malformed { .. }) {
                    let backup = CommandStore::back_up(&default_path)?;
                    warn!(
                        path = %default_path.display(),
                        backup = %backup.display(),
                        error = %err,
                        "resetting malformed command store"
                    );
                } else if !err.is_not_found() {
                    warn!(path = %default_path.display(), error = %err, "command store unreadable");
                }
                info!(path = %default_path.display(), "creating empty command store");
                CommandStore::write(&default_path, &CommandsFile::default())?;
            }
        }

        info!(path = %default_path.display(), "writing default config");
        self.set_data_path(default_path.clone())?;
        Ok(default_path)
    }

    /// Resolve the active data path from config if it is not known yet
    ///
    /// Leaves it unset when no config exists.
    fn ensure_data_path(&mut self) -> ArsenalResult<Option<&Path>> {
        if self.data_path.is_none() && self.config.has_config() {
            self.data_path = Some(self.config.read()?.data_path);
        }
        Ok(self.data_path.as_deref())
    }

    fn active_path(&mut self) -> ArsenalResult<PathBuf> {
        self.ensure_data_path()?
            .map(Path::to_path_buf)
            .ok_or(ArsenalError::NotConfigured)
    }

    // --- Commands ---

    pub fn get_commands(&mut self) -> ArsenalResult<CommandsFile> {
        let path = self.active_path()?;
        Ok(CommandStore::read(&path)?)
    }

    pub fn get_groups(&mut self) -> ArsenalResult<BTreeMap<String, Group>> {
        Ok(self.get_commands()?.groups)
    }

    /// Insert or replace the group at `key`
    ///
    /// Replacing an existing group discards its commands.
    pub fn add_group(
        &mut self,
        key: &str,
        name: &str,
        icon: &str,
        description: &str,
    ) -> ArsenalResult<()> {
        let path = self.active_path()?;
        let mut doc = CommandStore::read(&path)?;

        if doc
            .groups
            .insert(key.to_string(), Group::new(name, icon, description))
            .is_some()
        {
            debug!(group = key, "replacing existing group");
        }

        Ok(CommandStore::write(&path, &doc)?)
    }

    pub fn delete_group(&mut self, key: &str) -> ArsenalResult<()> {
        let path = self.active_path()?;
        let mut doc = CommandStore::read(&path)?;

        if doc.groups.remove(key).is_none() {
            debug!(group = key, "delete of unknown group");
        }

        Ok(CommandStore::write(&path, &doc)?)
    }

    /// Append a command to `group_key` and return the id it was given
    ///
    /// Returns `Ok(None)` without touching the file when the group does not
    /// exist.
    pub fn add_command(
        &mut self,
        group_key: &str,
        fields: CommandFields,
    ) -> ArsenalResult<Option<u32>> {
        let path = self.active_path()?;
        let mut doc = CommandStore::read(&path)?;

        let Some(group) = doc.groups.get_mut(group_key) else {
            debug!(group = group_key, "add to unknown group ignored");
            return Ok(None);
        };

        let id = group
            .push_command(fields, Utc::now())
            .ok_or_else(|| ArsenalError::IdOverflow {
                group: group_key.to_string(),
            })?;

        CommandStore::write(&path, &doc)?;
        Ok(Some(id))
    }

    /// Overwrite the mutable fields of command `id` in `group_key`
    ///
    /// The document is written back even when no command has that id.
    pub fn update_command(
        &mut self,
        group_key: &str,
        id: u32,
        fields: CommandFields,
    ) -> ArsenalResult<()> {
        let path = self.active_path()?;
        let mut doc = CommandStore::read(&path)?;

        let Some(group) = doc.groups.get_mut(group_key) else {
            debug!(group = group_key, "update in unknown group ignored");
            return Ok(());
        };

        if !group.update_command(id, fields) {
            debug!(group = group_key, id, "update of unknown command");
        }

        Ok(CommandStore::write(&path, &doc)?)
    }

    /// Remove command `id` from `group_key`, keeping the rest in order
    ///
    /// The document is written back even when no command has that id.
    pub fn delete_command(&mut self, group_key: &str, id: u32) -> ArsenalResult<()> {
        let path = self.active_path()?;
        let mut doc = CommandStore::read(&path)?;

        let Some(group) = doc.groups.get_mut(group_key) else {
            debug!(group = group_key, "delete in unknown group ignored");
            return Ok(());
        };

        if group.remove_command(id).is_none() {
            debug!(group = group_key, id, "delete of unknown command");
        }

        Ok(CommandStore::write(&path, &doc)?)
    }

    /// Case-insensitive substring search across all groups
    pub fn search(&mut self, query: &str) -> ArsenalResult<Vec<SearchResult>> {
        let doc = self.get_commands()?;
        Ok(search::search(&doc, query))
    }
}
