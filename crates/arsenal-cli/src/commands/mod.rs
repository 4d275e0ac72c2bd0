// crates/arsenal-cli/src/commands/mod.rs - Command Handler Modules
//
// One module per command family:
// - init: first-run bootstrap
// - config: show / change the active store
// - group: group CRUD
// - cmd: command CRUD
// - list: browse groups and commands
// - search: substring search

pub mod cmd;
pub mod config;
pub mod group;
pub mod init;
pub mod list;
pub mod search;
