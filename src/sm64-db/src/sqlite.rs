//! SQLite implementation using rusqlite (synchronous).

use crate::repository::*;
use crate::shared::{columns_for, create_table_sql, insert_sql, select_sql, TABLES};
use rusqlite::types::{Value, ValueRef};
use rusqlite::{params_from_iter, Connection};
use sm64::{
    Extraction, FieldValue, MacroObjectRecord, MacroPresetRecord, ModelRecord, ObjectRecord,
    Record,
};
use std::path::Path;

/// SQLite-backed record store
pub struct SqliteDb {
    conn: Connection,
}

fn to_sql_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Integer(v) => Value::Integer(*v),
        FieldValue::Text(v) => Value::Text(v.clone()),
    }
}

impl SqliteDb {
    /// Open or create the database
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path.as_ref())?;
        Ok(Self { conn })
    }

    /// Open an in-memory database
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    fn count_rows(&self, table: &str) -> DbResult<i64> {
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .map_err(|e| DbError::Database(e.to_string()))
    }
}

impl RecordRepository for SqliteDb {
    fn init(&self) -> DbResult<()> {
        for (table, columns) in TABLES {
            self.conn
                .execute(&create_table_sql(table, columns), [])
                .map_err(|e| DbError::Database(e.to_string()))?;
        }
        Ok(())
    }

    fn insert_records<R: Record>(&self, records: &[R]) -> DbResult<usize> {
        let mut stmt = self
            .conn
            .prepare_cached(&insert_sql(R::TABLE, R::COLUMNS))
            .map_err(|e| DbError::Database(e.to_string()))?;

        for record in records {
            let row = record.to_row();
            stmt.execute(params_from_iter(row.iter().map(to_sql_value)))
                .map_err(|e| DbError::Database(e.to_string()))?;
        }

        tracing::debug!("Inserted {} rows into {}", records.len(), R::TABLE);
        Ok(records.len())
    }

    fn write_extraction(&self, extraction: &Extraction) -> DbResult<TableStats> {
        // Dropping the transaction on an early return rolls it back
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| DbError::Database(e.to_string()))?;

        self.insert_records(&extraction.objects)?;
        self.insert_records(&extraction.macro_objects)?;
        self.insert_records(&extraction.models)?;
        self.insert_records(&extraction.macro_presets)?;

        tx.commit().map_err(|e| DbError::Database(e.to_string()))?;
        self.stats()
    }

    fn read_rows(&self, table: &str) -> DbResult<Vec<Vec<FieldValue>>> {
        let columns = columns_for(table).ok_or_else(|| DbError::UnknownTable(table.to_string()))?;

        let mut stmt = self
            .conn
            .prepare(&select_sql(table, columns))
            .map_err(|e| DbError::Database(e.to_string()))?;
        let mut rows = stmt
            .query([])
            .map_err(|e| DbError::Database(e.to_string()))?;

        let mut result = Vec::new();
        while let Some(row) = rows.next().map_err(|e| DbError::Database(e.to_string()))? {
            let mut values = Vec::with_capacity(columns.len());
            for (i, column) in columns.iter().enumerate() {
                let value = match row
                    .get_ref(i)
                    .map_err(|e| DbError::Database(e.to_string()))?
                {
                    ValueRef::Integer(v) => FieldValue::Integer(v),
                    ValueRef::Text(bytes) => {
                        FieldValue::Text(String::from_utf8_lossy(bytes).into_owned())
                    }
                    _ => {
                        return Err(DbError::UnexpectedValue {
                            table: table.to_string(),
                            column: column.name.to_string(),
                        })
                    }
                };
                values.push(value);
            }
            result.push(values);
        }
        Ok(result)
    }

    fn stats(&self) -> DbResult<TableStats> {
        Ok(TableStats {
            object_count: self.count_rows(ObjectRecord::TABLE)?,
            macro_object_count: self.count_rows(MacroObjectRecord::TABLE)?,
            model_count: self.count_rows(ModelRecord::TABLE)?,
            macro_preset_count: self.count_rows(MacroPresetRecord::TABLE)?,
        })
    }
}
