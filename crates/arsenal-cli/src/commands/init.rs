// crates/arsenal-cli/src/commands/init.rs - First-run bootstrap
//
// Safe to run repeatedly: an existing config or store is adopted, never
// overwritten.

use anyhow::{Context as _, Result};
use console::style;

use crate::context::Context;

/// Bootstrap arsenal on first run
///
/// Resolves the active command store and makes sure a config points at it:
///
/// ```text
/// ~/
/// ├── .config/arsenal/
/// │   └── config.json        { "dataPath": ... }
/// └── .nuke-arsenal/
///     └── commands.json      { "groups": {} }
/// ```
///
/// SAFETY FEATURES:
/// - An existing config is adopted and nothing else is touched
/// - An existing, readable store is adopted as-is
/// - A store that does not parse is copied to `commands.json.bak` before it
///   is reset
///
/// DESIGN PHILOSOPHY:
/// - Idempotent: running it again reports "Already initialized"
/// - User guidance: human output ends with the next commands to try
///
/// EXAMPLES:
/// ```bash
/// arsenal init                 # Create ~/.nuke-arsenal/commands.json
/// arsenal init --json          # {"dataPath": "...", "created": true}
/// ```
pub fn handle(ctx: &mut Context) -> Result<()> {
    let existed = ctx.service.has_config();
    let path = ctx
        .service
        .initialize_default()
        .context("Failed to initialize arsenal")?;

    if ctx.json() {
        return ctx.print_json(&serde_json::json!({
            "dataPath": path,
            "created": !existed,
        }));
    }

    if existed {
        println!("Already initialized, using {}", style(path.display()).cyan());
    } else {
        println!("{} Initialized arsenal", style("✔").green());
        println!("Commands are stored in {}", style(path.display()).cyan());
        println!();
        println!("Next steps:");
        println!("   arsenal group add tools \"Tools\"");
        println!("   arsenal cmd add tools \"ls -la\" -d \"long listing\"");
    }

    Ok(())
}
