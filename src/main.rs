//! kemet-host CLI
//!
//! Usage: kemet-host <COMMAND>
//!
//! Commands:
//!   activate   Start the language server and run first-time icon integration
//!   integrate  Force (re)install of the Kemet icons into Material Icon Theme
//!   remove     Remove the Kemet icons from Material Icon Theme
//!   status     Report icon integration health

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Activate => commands::cmd_activate(cli.config.as_deref(), cli.json),
        Commands::Integrate { dry_run } => {
            commands::cmd_integrate(cli.config.as_deref(), dry_run, cli.json)
        }
        Commands::Remove => commands::cmd_remove(cli.config.as_deref(), cli.json),
        Commands::Status => commands::cmd_status(cli.config.as_deref(), cli.json),
    }
}
