//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Output format for the stats command
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "sm64db")]
#[command(about = "Load Super Mario 64 decomp object placements into SQLite", long_about = None)]
pub struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a decomp checkout and write its records to a database
    #[command(visible_alias = "x")]
    Extract {
        /// Path to the SM64 source repo (uses configured default if not provided)
        #[arg(short, long)]
        repo: Option<PathBuf>,

        /// SQLite database file (in-memory dry run if neither given nor configured)
        #[arg(short, long)]
        db: Option<PathBuf>,

        /// Overwrite an existing database without asking
        #[arg(short, long)]
        overwrite: bool,

        /// Also write all parsed records as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Show row counts of an existing database
    Stats {
        /// SQLite database file (uses configured default if not provided)
        #[arg(short, long)]
        db: Option<PathBuf>,

        /// Output format: table (default), json
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default source repo path
        #[arg(long)]
        repo: Option<PathBuf>,

        /// Set default database path
        #[arg(long)]
        db: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
