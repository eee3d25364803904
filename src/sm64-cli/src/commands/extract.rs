//! Extract command handlers
//!
//! Handles the `extract` subcommand: parse a decomp checkout and load the
//! records into SQLite.

use anyhow::{bail, Context, Result};
use sm64_db::{RecordRepository, SqliteDb};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::commands::stats::print_table;
use crate::config::Config;

/// Prompt user before replacing an existing database
pub fn prompt_overwrite() -> Result<bool> {
    print!("Database already exists. Overwrite? [y/N] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Make room for a new database at `path`.
///
/// Returns `false` if the user declined to overwrite; the file is left
/// untouched in that case.
pub fn prepare_destination<F>(path: &Path, overwrite: bool, confirm: F) -> Result<bool>
where
    F: FnOnce() -> Result<bool>,
{
    if !path.is_file() {
        return Ok(true);
    }

    if !overwrite && !confirm()? {
        return Ok(false);
    }

    fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    Ok(true)
}

/// Handle the extract command
///
/// # Arguments
/// * `repo` - SM64 source repo, falls back to config
/// * `db` - Database file, falls back to config; in-memory when neither is set
/// * `overwrite` - Replace an existing database without prompting
/// * `json` - Optional JSON dump of every parsed record
pub fn handle(
    repo: Option<PathBuf>,
    db: Option<PathBuf>,
    overwrite: bool,
    json: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load()?;
    let Some(repo) = config.resolve_repo(repo) else {
        bail!("No repo given. Pass --repo or run `sm64db configure --repo PATH`");
    };

    run(&repo, config.resolve_db(db).as_deref(), overwrite, json.as_deref(), prompt_overwrite)
}

/// Parse `repo` and write its records
pub fn run<F>(
    repo: &Path,
    db: Option<&Path>,
    overwrite: bool,
    json: Option<&Path>,
    confirm: F,
) -> Result<()>
where
    F: FnOnce() -> Result<bool>,
{
    let repo = sm64::check_repo(repo)?;
    let extraction = sm64::parse_repo(&repo)
        .with_context(|| format!("Failed to parse {}", repo.display()))?;
    println!("Parsed {}", extraction.summary());

    let store = match db {
        Some(path) => {
            if !prepare_destination(path, overwrite, confirm)? {
                println!("Aborted, {} left unchanged", path.display());
                return Ok(());
            }
            tracing::info!("Writing database: {}", path.display());
            SqliteDb::open(path)
                .with_context(|| format!("Failed to open database {}", path.display()))?
        }
        None => {
            tracing::info!("No database given, writing to memory only");
            SqliteDb::open_in_memory()?
        }
    };

    if let Some(json_path) = json {
        let contents = serde_json::to_string_pretty(&extraction)?;
        fs::write(json_path, contents)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        println!("Records written to {}", json_path.display());
    }

    store.init()?;
    let stats = store.write_extraction(&extraction)?;
    print_table(&stats);

    Ok(())
}
