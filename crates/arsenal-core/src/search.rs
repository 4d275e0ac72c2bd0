// crates/arsenal-core/src/search.rs - Substring search over the command store
//
// Pure functions: no I/O. The service loads the document and hands it here.
//
// MATCHING:
// A command matches when the lowercased query is a substring of its lowercased
// `cmd`, `description`, or any tag. The empty query matches every command.
// Results come out in group-key order, then in command order within a group.

use serde::{Deserialize, Serialize};

use crate::model::{Command, CommandsFile};

/// One matching command together with the group it lives in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub group_key: String,
    pub group_name: String,
    pub command: Command,
}

/// Collect every command in `doc` matching `query`
pub fn search(doc: &CommandsFile, query: &str) -> Vec<SearchResult> {
    let query_lower = query.to_lowercase();
    let query = query_lower.as_str();

    doc.groups
        .iter()
        .flat_map(move |(key, group)| {
            group
                .commands
                .iter()
                .filter(move |command| matches(command, query))
                .map(move |command| SearchResult {
                    group_key: key.clone(),
                    group_name: group.name.clone(),
                    command: command.clone(),
                })
        })
        .collect()
}

/// Whether `command` matches an already lowercased query
pub fn matches(command: &Command, query_lower: &str) -> bool {
    contains_ci(&command.cmd, query_lower)
        || contains_ci(&command.description, query_lower)
        || command.tags.iter().any(|tag| contains_ci(tag, query_lower))
}

fn contains_ci(haystack: &str, query_lower: &str) -> bool {
    haystack.to_lowercase().contains(query_lower)
}
