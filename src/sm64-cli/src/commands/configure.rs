//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up sm64db defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Handle the configure command
///
/// # Arguments
/// * `repo` - Optional source repo to set as default
/// * `db` - Optional database file to set as default
/// * `show` - If true, show current configuration
pub fn handle(repo: Option<PathBuf>, db: Option<PathBuf>, show: bool) -> Result<()> {
    configure_at(&Config::config_path()?, repo, db, show)
}

/// Show or update the configuration stored at `config_path`
fn configure_at(
    config_path: &Path,
    repo: Option<PathBuf>,
    db: Option<PathBuf>,
    show: bool,
) -> Result<()> {
    let mut config = Config::load_from(config_path)?;

    if show {
        show_config(&config, config_path);
        return Ok(());
    }

    if repo.is_none() && db.is_none() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, repo, db);
    config.save_to(config_path)?;

    show_config(&config, config_path);
    println!("Config saved to: {}", config_path.display());

    Ok(())
}

/// Merge new defaults into the configuration
fn apply(config: &mut Config, repo: Option<PathBuf>, db: Option<PathBuf>) {
    if let Some(repo) = repo {
        config.repo = Some(repo);
    }
    if let Some(db) = db {
        config.db = Some(db);
    }
}

/// Display current configuration
fn show_config(config: &Config, config_path: &Path) {
    match &config.repo {
        Some(repo) => println!("Repo: {}", repo.display()),
        None => println!("No repo configured"),
    }
    match &config.db {
        Some(db) => println!("Database: {}", db.display()),
        None => println!("No database configured"),
    }

    println!("Config file: {}", config_path.display());
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: sm64db configure --repo PATH_TO_SM64 [--db PATH]");
    println!("   or: sm64db configure --show");
}
