mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "sm64db=debug,sm64=debug,sm64_db=debug"
    } else {
        "sm64db=info,sm64=info,sm64_db=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Extract {
            repo,
            db,
            overwrite,
            json,
        } => commands::extract::handle(repo, db, overwrite, json),

        Commands::Stats { db, format } => commands::stats::handle(db, format),

        Commands::Configure { repo, db, show } => commands::configure::handle(repo, db, show),
    }
}
