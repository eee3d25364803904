//! Tabular storage for records extracted from the Super Mario 64 decompilation
//!
//! One table per record kind, with columns taken from each kind's static
//! schema (see [`sm64::Record`]). Booleans are stored as 0/1 integers.
//!
//! # Example
//!
//! ```no_run
//! use sm64_db::{RecordRepository, SqliteDb};
//! use std::path::Path;
//!
//! let extraction = sm64::parse_repo(Path::new("sm64")).unwrap();
//! let db = SqliteDb::open("sm64.db").unwrap();
//! db.init().unwrap();
//! db.write_extraction(&extraction).unwrap();
//! ```

pub mod repository;
pub mod shared;
pub mod sqlite;

pub use repository::{DbError, DbResult, RecordRepository, TableStats};
pub use sqlite::SqliteDb;
