// crates/arsenal-cli/src/commands/cmd.rs - Command CRUD
//
// The service treats a missing group or id as a silent no-op. Here we look
// first so the user gets a warning, but the exit status stays 0.

use anyhow::Result;
use arsenal_core::{CommandFields, Group};
use console::style;

use crate::cli::{CmdCommands, CommandMeta};
use crate::context::Context;

/// Add, edit and remove commands inside a group
///
/// IDS:
/// New commands get the group's highest id plus one. Removing a command never
/// renumbers the others, so ids may have gaps.
///
/// EDITING:
/// Only the flags given on the command line change; every other field keeps
/// its current value. `--clear-tags` empties the tag list.
///
/// EXAMPLES:
/// ```bash
/// # Add with metadata, tags split on commas
/// arsenal cmd add recon "nmap -sC -sV $IP" -d "Default scripts" -t scan,tcp
///
/// # Change only the description of command 1
/// arsenal cmd edit recon 1 -d "Scripts and versions"
///
/// arsenal cmd rm recon 1
/// ```
pub fn handle(ctx: &mut Context, cmd: CmdCommands) -> Result<()> {
    match cmd {
        CmdCommands::Add { group, cmd, meta } => {
            let fields = CommandFields::new(cmd)
                .description(meta.description.unwrap_or_default())
                .output(meta.output.unwrap_or_default())
                .note(meta.note.unwrap_or_default())
                .tags(meta.tags);

            match ctx.service.add_command(&group, fields)? {
                Some(id) if ctx.json() => {
                    ctx.print_json(&serde_json::json!({ "group": group, "id": id }))?
                }
                Some(id) => println!("{} Added #{} to '{}'", style("✔").green(), id, group),
                None => warn_missing_group(ctx, &group)?,
            }
        }
        CmdCommands::Edit {
            group,
            id,
            cmd,
            meta,
            clear_tags,
        } => {
            let groups = ctx.service.get_groups()?;
            let Some(current) = groups.get(&group).and_then(|g| g.command(id)) else {
                return warn_missing_command(ctx, groups.get(&group), &group, id);
            };

            let fields = merge_fields(CommandFields::from(current), cmd, meta, clear_tags);
            ctx.service.update_command(&group, id, fields)?;

            if ctx.json() {
                ctx.print_json(&serde_json::json!({ "group": group, "id": id, "updated": true }))?;
            } else {
                println!("{} Updated #{} in '{}'", style("✔").green(), id, group);
            }
        }
        CmdCommands::Rm { group, id } => {
            let groups = ctx.service.get_groups()?;
            if groups.get(&group).and_then(|g| g.command(id)).is_none() {
                return warn_missing_command(ctx, groups.get(&group), &group, id);
            }

            ctx.service.delete_command(&group, id)?;

            if ctx.json() {
                ctx.print_json(&serde_json::json!({ "group": group, "id": id, "removed": true }))?;
            } else {
                println!("{} Removed #{} from '{}'", style("✔").green(), id, group);
            }
        }
    }

    Ok(())
}

/// Overlay the flags that were given onto the command's current fields
fn merge_fields(
    mut fields: CommandFields,
    cmd: Option<String>,
    meta: CommandMeta,
    clear_tags: bool,
) -> CommandFields {
    if let Some(cmd) = cmd {
        fields.cmd = cmd;
    }
    if let Some(description) = meta.description {
        fields.description = description;
    }
    if let Some(output) = meta.output {
        fields.output = output;
    }
    if let Some(note) = meta.note {
        fields.note = note;
    }
    if clear_tags {
        fields.tags.clear();
    }
    for tag in meta.tags {
        if !fields.tags.contains(&tag) {
            fields.tags.push(tag);
        }
    }
    fields
}

fn warn_missing_group(ctx: &Context, group: &str) -> Result<()> {
    if ctx.json() {
        return ctx.print_json(&serde_json::json!({ "group": group, "id": null }));
    }
    eprintln!("{} No group named '{}', nothing added", style("!").yellow(), group);
    Ok(())
}

fn warn_missing_command(ctx: &Context, existing: Option<&Group>, group: &str, id: u32) -> Result<()> {
    if ctx.json() {
        return ctx.print_json(&serde_json::json!({ "group": group, "id": id, "found": false }));
    }
    match existing {
        Some(_) => eprintln!("{} No command #{} in '{}'", style("!").yellow(), id, group),
        None => eprintln!("{} No group named '{}'", style("!").yellow(), group),
    }
    Ok(())
}
