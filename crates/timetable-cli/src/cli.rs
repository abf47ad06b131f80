//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Timetable conflict resolver.
///
/// Reads `<source> <HH:MM> <HH:MM>` records, drops invalid ones, keeps one
/// interval per conflicting cluster and prints the result grouped by source.
#[derive(Debug, Parser)]
#[command(name = "timetable", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a timetable file.
    Resolve(ResolveArgs),

    /// List configured sources in display order.
    Sources,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Input file. Falls back to `input_path` from the config.
    pub input: Option<PathBuf>,

    /// Output file. Falls back to `output_path` from the config, then stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
