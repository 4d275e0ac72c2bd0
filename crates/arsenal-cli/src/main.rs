// crates/arsenal-cli/src/main.rs - CLI Application Entry Point
//
// A thin presentation layer over arsenal-core. Every subcommand maps onto one
// ArsenalService call and renders the result, either for humans or as JSON.
//
// EXAMPLE USAGE:
// ```bash
// arsenal init                                   # Create config + empty store
// arsenal group add recon "Recon" --icon eye     # Create a group
// arsenal cmd add recon "nmap -sV host" -t scan  # Add a command
// arsenal search scan --json | jq '.[].command'  # Pipe output to other tools
// ```

use anyhow::Result;
use clap::Parser;
use tracing::Level;

mod cli; // Command-line interface definitions (pure data structures)
mod commands; // Command implementations
mod context; // Application context and dependency injection
mod stdin; // Stdin fallback for command inputs

use cli::Cli;
use context::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut ctx = Context::new(&cli)?;

    match cli.command {
        cli::Commands::Init => commands::init::handle(&mut ctx),
        cli::Commands::Config(cmd) => commands::config::handle(&mut ctx, cmd),
        cli::Commands::Group(cmd) => commands::group::handle(&mut ctx, cmd),
        cli::Commands::Cmd(cmd) => commands::cmd::handle(&mut ctx, cmd),
        cli::Commands::List { group } => commands::list::handle(&mut ctx, group),
        cli::Commands::Search { query } => commands::search::handle(&mut ctx, query),
    }
}

/// Log to stderr so stdout stays clean for `--json` consumers
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
