// file: src/main.rs
// version: 1.0.0
// guid: f2a61d98-7b30-4c5e-8f12-d94b0e7a3c86

//! Nextcloud POTD Config - Main entry point

use clap::Parser;
use nextcloud_potd_config::{
    cli::{args::Cli, args::Commands, commands::*},
    logging::logger,
    Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logger::init_logger(cli.verbose, cli.quiet)?;

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Show { json } => show_command(config, json).await,
        Commands::Set { key, value } => set_command(config, &key, &value).await,
        Commands::Validate => validate_command(config).await,
        Commands::Save { script, dry_run } => save_command(config, &script, dry_run).await,
        Commands::CheckPrereqs => check_prerequisites_command(config).await,
    }
}
