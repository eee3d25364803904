//! Table definitions and SQL building.
//!
//! Statements are generated from each record kind's static column list, so
//! column order in the database always matches field declaration order.

use sm64::{Column, MacroObjectRecord, MacroPresetRecord, ModelRecord, ObjectRecord, Record};

/// Every stored table with its columns, in creation order
pub const TABLES: &[(&str, &[Column])] = &[
    (ObjectRecord::TABLE, ObjectRecord::COLUMNS),
    (MacroObjectRecord::TABLE, MacroObjectRecord::COLUMNS),
    (ModelRecord::TABLE, ModelRecord::COLUMNS),
    (MacroPresetRecord::TABLE, MacroPresetRecord::COLUMNS),
];

/// Look up the columns of a known table
pub fn columns_for(table: &str) -> Option<&'static [Column]> {
    TABLES
        .iter()
        .find(|(name, _)| *name == table)
        .map(|(_, columns)| *columns)
}

fn column_names(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| c.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `CREATE TABLE` statement for a table
pub fn create_table_sql(table: &str, columns: &[Column]) -> String {
    let definitions = columns
        .iter()
        .map(|c| format!("{} {}", c.name, c.kind.sql_type()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("CREATE TABLE IF NOT EXISTS {} ({})", table, definitions)
}

/// `INSERT` statement with one positional parameter per column
pub fn insert_sql(table: &str, columns: &[Column]) -> String {
    let placeholders = (1..=columns.len())
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        column_names(columns),
        placeholders
    )
}

/// `SELECT` of every column in insertion order
pub fn select_sql(table: &str, columns: &[Column]) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY rowid",
        column_names(columns),
        table
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model_table() {
        assert_eq!(
            create_table_sql(ModelRecord::TABLE, ModelRecord::COLUMNS),
            "CREATE TABLE IF NOT EXISTS model (model_name TEXT, model_id INTEGER)"
        );
    }

    #[test]
    fn test_create_object_table_stores_acts_as_integers() {
        let sql = create_table_sql(ObjectRecord::TABLE, ObjectRecord::COLUMNS);
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS object (model_name TEXT, level TEXT, initial_x INTEGER"));
        assert!(sql.contains("behavior TEXT, in_act_1 INTEGER"));
        assert!(sql.ends_with("in_act_6 INTEGER)"));
        assert!(!sql.contains("beh_param"));
    }

    #[test]
    fn test_insert_sql() {
        assert_eq!(
            insert_sql(MacroPresetRecord::TABLE, MacroPresetRecord::COLUMNS),
            "INSERT INTO macro_preset (macro_name, behavior, model_name) VALUES (?1, ?2, ?3)"
        );
    }

    #[test]
    fn test_select_sql() {
        assert_eq!(
            select_sql(ModelRecord::TABLE, ModelRecord::COLUMNS),
            "SELECT model_name, model_id FROM model ORDER BY rowid"
        );
    }

    #[test]
    fn test_columns_for() {
        assert_eq!(columns_for("macro_object").map(|c| c.len()), Some(6));
        assert_eq!(columns_for("object").map(|c| c.len()), Some(15));
        assert!(columns_for("items").is_none());
    }
}
