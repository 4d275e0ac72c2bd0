use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "arsenal")]
#[command(about = "Keep your favourite shell commands close at hand")]
#[command(version)]
pub struct Cli {
    /// Command store to use for this invocation (does not change the config)
    #[arg(long, global = true, env = "ARSENAL_DATA")]
    pub data: Option<PathBuf>,

    /// Output as JSON for machine processing
    #[arg(long, global = true)]
    pub json: bool,

    /// Log what the store is doing to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level command categories
#[derive(Subcommand)]
pub enum Commands {
    /// Create the default config and command store if missing
    Init,

    /// Show or change where commands are stored
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Group operations (add, remove, list)
    #[command(subcommand)]
    Group(GroupCommands),

    /// Command operations (add, edit, remove)
    #[command(subcommand)]
    Cmd(CmdCommands),

    /// List groups and their commands
    List {
        /// Only show this group
        group: Option<String>,
    },

    /// Search commands, descriptions and tags
    Search {
        /// Search query (read from stdin when omitted)
        query: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,

    /// Point the configuration at another command store
    SetPath {
        /// Path of the command store JSON file
        path: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum GroupCommands {
    /// Create a group, or replace an existing one (its commands are dropped)
    Add {
        /// Group key, e.g. "recon"
        key: String,

        /// Display name
        name: String,

        #[arg(long, default_value = "")]
        icon: String,

        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Remove a group and all its commands
    Rm {
        key: String,
    },

    /// List group keys and names
    List,
}

#[derive(Subcommand)]
pub enum CmdCommands {
    /// Add a command to a group
    Add {
        /// Group key
        group: String,

        /// The shell command itself
        cmd: String,

        #[command(flatten)]
        meta: CommandMeta,
    },

    /// Edit a command; fields that are not given keep their value
    Edit {
        group: String,

        id: u32,

        /// Replacement command text
        #[arg(long)]
        cmd: Option<String>,

        #[command(flatten)]
        meta: CommandMeta,

        /// Drop all tags before applying --tag
        #[arg(long)]
        clear_tags: bool,
    },

    /// Remove a command from a group
    Rm {
        group: String,

        id: u32,
    },
}

/// Optional command metadata shared by add and edit
#[derive(Args)]
pub struct CommandMeta {
    #[arg(short, long)]
    pub description: Option<String>,

    /// Sample output
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long)]
    pub note: Option<String>,

    /// Tag (repeatable, or comma separated)
    #[arg(short, long = "tag", value_delimiter = ',')]
    pub tags: Vec<String>,
}
