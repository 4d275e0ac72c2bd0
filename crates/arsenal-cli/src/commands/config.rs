use anyhow::{Context as _, Result, bail};
use console::style;
use std::path::absolute;

use crate::cli::ConfigCommands;
use crate::context::Context;

/// Inspect or change which command store is active
///
/// `show` prints the config document and fails when there is none yet.
/// `set-path` stores an absolute version of the given path; the file itself
/// is not created until the first write to it.
///
/// EXAMPLES:
/// ```bash
/// arsenal config show
/// arsenal config set-path ~/sync/arsenal.json
/// arsenal config set-path ./team.json      # stored as an absolute path
/// ```
pub fn handle(ctx: &mut Context, cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            if !ctx.service.has_config() {
                bail!("No configuration found. Run `arsenal init` first.");
            }
            let config = ctx.service.get_config()?;

            if ctx.json() {
                ctx.print_json(&config)?;
            } else {
                println!("config:    {}", ctx.service.paths().config_path().display());
                println!("data path: {}", style(config.data_path.display()).cyan());
            }
        }
        ConfigCommands::SetPath { path } => {
            // the config records an absolute path
            let path = absolute(&path)
                .with_context(|| format!("Invalid path: {}", path.display()))?;
            ctx.service
                .set_data_path(&path)
                .context("Failed to update configuration")?;

            if ctx.json() {
                ctx.print_json(&serde_json::json!({ "dataPath": path }))?;
            } else {
                println!("{} Data path set to {}", style("✔").green(), path.display());
            }
        }
    }

    Ok(())
}
