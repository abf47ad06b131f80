use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use timetable_core::SourceTable;
use tracing_subscriber::EnvFilter;

use timetable_cli::commands::{resolve, sources};
use timetable_cli::{Cli, Commands, Config};

/// Load config and validate the source table.
fn load_config(config_path: Option<&Path>) -> Result<(Config, SourceTable)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let table = config
        .source_table()
        .context("invalid source configuration")?;
    Ok((config, table))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so they never mix with a timetable written to stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match &cli.command {
        Some(Commands::Resolve(args)) => {
            let (config, table) = load_config(cli.config.as_deref())?;
            resolve::run(args, &config, &table)?;
        }
        Some(Commands::Sources) => {
            let (_config, table) = load_config(cli.config.as_deref())?;
            sources::run(&mut std::io::stdout().lock(), &table)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
