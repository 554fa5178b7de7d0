use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// kemet-host - Kemet language host and icon theme integration
#[derive(Parser, Debug)]
#[command(name = "kemet-host")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output newline-delimited JSON events
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a config file (defaults to ./kemet.toml, then user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the language server and run first-time icon integration
    Activate,

    /// Force (re)install of the Kemet icons into Material Icon Theme
    Integrate {
        /// Show what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove the Kemet icons from Material Icon Theme
    Remove,

    /// Report icon integration health
    Status,
}
