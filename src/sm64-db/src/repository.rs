//! Repository trait for record storage.
//!
//! This trait defines the interface for storage backends.

use serde::Serialize;
use sm64::{Extraction, FieldValue, Record};

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Unexpected value in {table}.{column}")]
    UnexpectedValue { table: String, column: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for repository operations
pub type DbResult<T> = Result<T, DbError>;

/// Row counts per table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub object_count: i64,
    pub macro_object_count: i64,
    pub model_count: i64,
    pub macro_preset_count: i64,
}

/// Trait for record storage (synchronous)
pub trait RecordRepository {
    /// Create one table per record kind
    fn init(&self) -> DbResult<()>;

    /// Append records to their table, returning the number of rows written
    fn insert_records<R: Record>(&self, records: &[R]) -> DbResult<usize>;

    /// Write every record kind in a single transaction
    fn write_extraction(&self, extraction: &Extraction) -> DbResult<TableStats>;

    /// Read a table back in insertion order
    fn read_rows(&self, table: &str) -> DbResult<Vec<Vec<FieldValue>>>;

    /// Get row counts
    fn stats(&self) -> DbResult<TableStats>;
}
