use anyhow::Result;
use console::style;

use crate::cli::GroupCommands;
use crate::context::Context;

/// Handle group management commands
///
/// `add` is an upsert: adding a key that already exists replaces the group
/// and drops its commands, and the output says so. `rm` on an unknown key
/// only warns.
///
/// EXAMPLES:
/// ```bash
/// arsenal group add recon "Recon" --icon eye -d "Discovery and scanning"
/// arsenal group list --json | jq '.[].key'
/// arsenal group rm recon
/// ```
pub fn handle(ctx: &mut Context, cmd: GroupCommands) -> Result<()> {
    match cmd {
        GroupCommands::Add {
            key,
            name,
            icon,
            description,
        } => {
            let replaced = ctx.service.get_groups()?.contains_key(&key);
            ctx.service.add_group(&key, &name, &icon, &description)?;

            if ctx.json() {
                return ctx.print_json(&serde_json::json!({ "key": key, "replaced": replaced }));
            }
            if replaced {
                println!(
                    "{} Replaced group '{}' (previous commands were removed)",
                    style("!").yellow(),
                    key
                );
            } else {
                println!("{} Added group '{}'", style("✔").green(), key);
            }
        }
        GroupCommands::Rm { key } => {
            let existed = ctx.service.get_groups()?.contains_key(&key);
            ctx.service.delete_group(&key)?;

            if ctx.json() {
                return ctx.print_json(&serde_json::json!({ "key": key, "removed": existed }));
            }
            if existed {
                println!("{} Removed group '{}'", style("✔").green(), key);
            } else {
                eprintln!("{} No group named '{}'", style("!").yellow(), key);
            }
        }
        GroupCommands::List => {
            let groups = ctx.service.get_groups()?;

            if ctx.json() {
                let summary: Vec<_> = groups
                    .iter()
                    .map(|(key, group)| {
                        serde_json::json!({
                            "key": key,
                            "name": group.name,
                            "icon": group.icon,
                            "description": group.description,
                            "commands": group.commands.len(),
                        })
                    })
                    .collect();
                return ctx.print_json(&summary);
            }

            for (key, group) in &groups {
                println!(
                    "{:<16} {} ({} commands)",
                    style(key).bold(),
                    group.name,
                    group.commands.len()
                );
            }
        }
    }

    Ok(())
}
