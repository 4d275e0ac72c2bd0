// crates/arsenal-core/src/model.rs - Command store data model
//
// CommandsFile is the root of the store document. Groups are keyed by a
// caller-chosen slug; commands inside a group keep their insertion order.
//
// ID RULES:
// - Ids are scoped to their group, not global
// - A new id is max(existing) + 1, or 1 for an empty group
// - Deleting never renumbers, so ids have gaps; deleting the current
//   maximum lets the next add hand that id out again
// - `created` is stamped once and never touched by an update

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Root of the command store document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandsFile {
    /// Groups by key, iterated in key order
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: BTreeMap<String, Group>,
}

/// A named collection of related commands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commands: Vec<Command>,
}

/// One stored shell snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub cmd: String,
    #[serde(default)]
    pub description: String,
    /// Sample output shown next to the command
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub note: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Missing in hand-edited files decodes as the Unix epoch
    #[serde(default)]
    pub created: DateTime<Utc>,
}

/// The caller-editable part of a command
///
/// Used for both creation and update; updates overwrite every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandFields {
    pub cmd: String,
    pub description: String,
    pub output: String,
    pub note: String,
    pub tags: Vec<String>,
}

impl CommandFields {
    pub fn new(cmd: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl From<&Command> for CommandFields {
    fn from(command: &Command) -> Self {
        Self {
            cmd: command.cmd.clone(),
            description: command.description.clone(),
            output: command.output.clone(),
            note: command.note.clone(),
            tags: command.tags.clone(),
        }
    }
}

impl Command {
    /// Build a command with a store-assigned id
    pub fn new(id: u32, fields: CommandFields, created: DateTime<Utc>) -> Self {
        Self {
            id,
            cmd: fields.cmd,
            description: fields.description,
            output: fields.output,
            note: fields.note,
            tags: fields.tags,
            created,
        }
    }

    /// Overwrite the mutable fields, leaving `id` and `created` alone
    pub fn apply(&mut self, fields: CommandFields) {
        self.cmd = fields.cmd;
        self.description = fields.description;
        self.output = fields.output;
        self.note = fields.note;
        self.tags = fields.tags;
    }
}

impl Group {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            description: description.into(),
            commands: Vec::new(),
        }
    }

    /// Id the next appended command will receive
    ///
    /// `None` when the current maximum is `u32::MAX`.
    pub fn next_command_id(&self) -> Option<u32> {
        self.commands
            .iter()
            .map(|c| c.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1))
    }

    pub fn command(&self, id: u32) -> Option<&Command> {
        self.commands.iter().find(|c| c.id == id)
    }

    /// Append a new command at the tail and return its id
    pub fn push_command(&mut self, fields: CommandFields, created: DateTime<Utc>) -> Option<u32> {
        let id = self.next_command_id()?;
        self.commands.push(Command::new(id, fields, created));
        Some(id)
    }

    /// Overwrite the first command with `id`; false when there is none
    pub fn update_command(&mut self, id: u32, fields: CommandFields) -> bool {
        match self.commands.iter_mut().find(|c| c.id == id) {
            Some(command) => {
                command.apply(fields);
                true
            }
            None => false,
        }
    }

    /// Remove the first command with `id`, keeping the others in order
    pub fn remove_command(&mut self, id: u32) -> Option<Command> {
        let index = self.commands.iter().position(|c| c.id == id)?;
        Some(self.commands.remove(index))
    }
}

/// Decode an explicit JSON `null` as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
