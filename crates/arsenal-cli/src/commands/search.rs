// crates/arsenal-cli/src/commands/search.rs - Command Search
//
// Case-insensitive substring search over command text, descriptions and tags.

use anyhow::Result;
use console::style;

use crate::commands::list::print_command;
use crate::context::Context;

/// Search every group for matching commands
///
/// Matches the query case-insensitively against the command text, the
/// description and each tag. Notes and sample output are not searched.
/// Without an argument the query is read from piped stdin.
///
/// EXAMPLES:
/// ```bash
/// arsenal search nmap
/// echo smb | arsenal search
/// arsenal search "" --json     # every command, with its group
/// ```
pub fn handle(ctx: &mut Context, query: Option<String>) -> Result<()> {
    // Get query from argument or stdin
    let query = crate::stdin::read_input_or_stdin(query.as_deref())?;
    let results = ctx.service.search(&query)?;

    if ctx.json() {
        return ctx.print_json(&results);
    }

    if results.is_empty() {
        println!("No commands match '{}'", query);
        return Ok(());
    }

    let mut current_group: Option<&str> = None;
    for result in &results {
        if current_group != Some(result.group_key.as_str()) {
            println!(
                "{} {}",
                style(&result.group_name).bold(),
                style(format!("[{}]", result.group_key)).dim()
            );
            current_group = Some(result.group_key.as_str());
        }
        print_command(&result.command);
    }

    Ok(())
}
