// file: src/cli/args.rs
// version: 1.0.0
// guid: 4c7d92b5-0e68-4a13-bc86-72f5d1a09e34

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nextcloud-potd-config")]
#[command(about = "Manage the Plasma Nextcloud picture-of-the-day provider configuration")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(
        short,
        long,
        global = true,
        help = "Config file path (defaults to the provider's location under the user config dir)"
    )]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current configuration
    Show {
        #[arg(short, long)]
        json: bool,
    },

    /// Set a single config entry (e.g. Url, Username, MaxImages)
    Set {
        #[arg(help = "Entry key, as spelled in the config file")]
        key: String,

        #[arg(help = "New value for the entry")]
        value: String,
    },

    /// Validate the configuration
    Validate,

    /// Save the configuration through a save script
    Save {
        #[arg(short, long, help = "Script the rendered config is piped into")]
        script: String,

        #[arg(long, help = "Print the shell command without executing it")]
        dry_run: bool,
    },

    /// Check system prerequisites
    CheckPrereqs,
}
