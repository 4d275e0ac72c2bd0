// crates/arsenal-core/src/lib.rs - Arsenal core library
//
// Data-management layer for a personal command-snippet manager. Groups of
// shell commands live in one JSON document; a small config document records
// where that document is.
//
// MODULE ORGANIZATION:
// - paths: home-relative config/data locations and directory creation
// - config: the config document (which store file is active)
// - model: groups, commands and group-local id assignment
// - store: whole-document JSON persistence of the command store
// - search: case-insensitive substring search over the model
// - service: the façade callers use (CRUD + search, read-modify-write)

pub mod config;
pub mod model;
pub mod paths;
pub mod search;
pub mod service;
pub mod store;

pub use config::{Config, ConfigError, ConfigResult, ConfigStore};
pub use model::{Command, CommandFields, CommandsFile, Group};
pub use paths::{ArsenalPaths, PathError, PathResult};
pub use search::SearchResult;
pub use service::{ArsenalError, ArsenalResult, ArsenalService};
pub use store::{CommandStore, StoreError, StoreResult};
