use anyhow::Result;
use arsenal_core::ArsenalService;
use serde::Serialize;

use crate::cli::Cli;

/// Application context that gets passed to command handlers
///
/// Owns the service so every handler talks to the same lazily resolved
/// data path.
///
/// DATA PATH RESOLUTION (first match wins):
/// 1. `--data <path>` or `ARSENAL_DATA`, for this run only
/// 2. `dataPath` from `~/.config/arsenal/config.json`
/// 3. Nothing: data commands fail until `arsenal init` has run
pub struct Context {
    pub service: ArsenalService,
    json: bool,
}

impl Context {
    /// Build the context from parsed arguments
    ///
    /// `--data` (or `ARSENAL_DATA`) overrides the configured store for this
    /// run only.
    pub fn new(cli: &Cli) -> Result<Self> {
        let mut service = ArsenalService::from_home()?;

        if let Some(path) = &cli.data {
            service.use_data_path(path);
        }

        Ok(Self {
            service,
            json: cli.json,
        })
    }

    pub fn json(&self) -> bool {
        self.json
    }

    /// Print `value` as pretty JSON on stdout
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
