//! Stats command handlers

use anyhow::{bail, Result};
use sm64_db::{RecordRepository, SqliteDb, TableStats};
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::Config;

/// Print row counts as a table
pub fn print_table(stats: &TableStats) {
    println!("Database Statistics");
    println!("  Objects:       {}", stats.object_count);
    println!("  Macro objects: {}", stats.macro_object_count);
    println!("  Models:        {}", stats.model_count);
    println!("  Macro presets: {}", stats.macro_preset_count);
}

/// Handle `stats`
pub fn handle(db: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let Some(db) = config.resolve_db(db) else {
        bail!("No database given. Pass --db or run `sm64db configure --db PATH`");
    };
    if !db.is_file() {
        bail!("{} does not exist", db.display());
    }

    let stats = SqliteDb::open(&db)?.stats()?;
    match format {
        OutputFormat::Table => print_table(&stats),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }
    Ok(())
}
