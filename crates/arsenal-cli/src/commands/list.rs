use anyhow::{Result, bail};
use arsenal_core::{Command, Group};
use console::style;

use crate::context::Context;

/// List groups with their commands
///
/// Human output is grouped and indented; `--json` prints the groups map as
/// it is stored.
///
/// EXAMPLES:
/// ```bash
/// arsenal list                 # every group
/// arsenal list recon           # one group
/// arsenal list --json | jq '.recon.commands | length'
/// ```
pub fn handle(ctx: &mut Context, only: Option<String>) -> Result<()> {
    let mut groups = ctx.service.get_groups()?;

    if let Some(key) = &only {
        let Some(group) = groups.remove(key) else {
            bail!("No group named '{}'", key);
        };
        groups.clear();
        groups.insert(key.clone(), group);
    }

    if ctx.json() {
        return ctx.print_json(&groups);
    }

    if groups.is_empty() {
        println!("No groups yet. Create one with `arsenal group add <key> <name>`.");
        return Ok(());
    }

    for (key, group) in &groups {
        print_group_header(key, group);
        for command in &group.commands {
            print_command(command);
        }
        println!();
    }

    Ok(())
}

fn print_group_header(key: &str, group: &Group) {
    let icon = if group.icon.is_empty() {
        String::new()
    } else {
        format!("{} ", group.icon)
    };
    println!("{}{} {}", icon, style(&group.name).bold(), style(format!("[{key}]")).dim());
    if !group.description.is_empty() {
        println!("  {}", style(&group.description).italic());
    }
}

/// One command, indented under its group
pub(crate) fn print_command(command: &Command) {
    println!(
        "  {} {}",
        style(format!("#{:<3}", command.id)).dim(),
        style(&command.cmd).cyan()
    );
    if !command.description.is_empty() {
        println!("       {}", command.description);
    }
    if !command.tags.is_empty() {
        println!("       {}", style(command.tags.join(", ")).magenta());
    }
    if !command.note.is_empty() {
        println!("       note: {}", command.note);
    }
    if !command.output.is_empty() {
        for line in command.output.lines() {
            println!("       {} {}", style("│").dim(), line);
        }
    }
}
