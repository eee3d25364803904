//! Macro presets: which behavior and model a `macro_*` name stands for.
//!
//! Names come from the `enum MacroPresets` list and the values from the
//! `MacroObjectPresets[]` table. The two are joined by position, so both must
//! list the same number of entries.

use serde::Serialize;

use crate::error::{ParseError, ParseResult};
use crate::normalize::strip_comments_and_whitespace;
use crate::schema::{Column, FieldValue, Record};
use crate::shape::RawBehParam;

/// Prefix of every preset name in the enum list
pub const PRESET_NAME_PREFIX: &str = "macro_";

/// Line opening the preset table
pub const PRESET_TABLE_OPEN: &str = "struct MacroPreset MacroObjectPresets[] = {";

/// Line closing the preset table
pub const PRESET_TABLE_CLOSE: &str = "};";

const PRESET_ROW_FIELDS: usize = 3;

/// A macro preset joined with its name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacroPresetRecord {
    pub macro_name: String,
    pub behavior: String,
    pub model_name: String,
    /// Undecoded default behavior parameter, not stored
    pub beh_param: RawBehParam,
}

impl Record for MacroPresetRecord {
    const TABLE: &'static str = "macro_preset";

    const COLUMNS: &'static [Column] = &[
        Column::text("macro_name"),
        Column::text("behavior"),
        Column::text("model_name"),
    ];

    fn to_row(&self) -> Vec<FieldValue> {
        vec![
            self.macro_name.as_str().into(),
            self.behavior.as_str().into(),
            self.model_name.as_str().into(),
        ]
    }
}

/// One `{behavior, model, param}` row of the preset table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetRow {
    pub behavior: String,
    pub model_name: String,
    pub beh_param: RawBehParam,
}

/// Collect preset names in enum order
pub fn parse_preset_names(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with(PRESET_NAME_PREFIX))
        .map(|line| line.strip_suffix(',').unwrap_or(line).trim().to_string())
        .collect()
}

/// Collect the rows between the table's opening and closing lines.
///
/// Blank lines inside the table are skipped; any other row must have exactly
/// three fields.
pub fn parse_preset_rows(text: &str) -> ParseResult<Vec<PresetRow>> {
    let mut rows = Vec::new();
    let lines = text
        .lines()
        .map(str::trim)
        .skip_while(|line| !line.starts_with(PRESET_TABLE_OPEN))
        .skip(1);

    for line in lines {
        if line == PRESET_TABLE_CLOSE {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let inner = line.replace('{', "").replace("},", "");
        let fields: Vec<String> = inner.split(',').map(strip_comments_and_whitespace).collect();
        let [behavior, model_name, beh_param]: [String; PRESET_ROW_FIELDS] =
            fields.try_into().map_err(|fields: Vec<String>| ParseError::Arity {
                expected: PRESET_ROW_FIELDS,
                actual: fields.len(),
                line: inner.clone(),
            })?;

        rows.push(PresetRow {
            behavior,
            model_name,
            beh_param: RawBehParam(beh_param),
        });
    }

    Ok(rows)
}

/// Pair names with table rows by position.
///
/// Fails with [`ParseError::PresetCountMismatch`] unless both sides have the
/// same length.
pub fn join_presets(names: Vec<String>, rows: Vec<PresetRow>) -> ParseResult<Vec<MacroPresetRecord>> {
    if names.len() != rows.len() {
        return Err(ParseError::PresetCountMismatch {
            names: names.len(),
            rows: rows.len(),
        });
    }

    Ok(names
        .into_iter()
        .zip(rows)
        .map(|(macro_name, row)| MacroPresetRecord {
            macro_name,
            behavior: row.behavior,
            model_name: row.model_name,
            beh_param: row.beh_param,
        })
        .collect())
}

/// Parse the preset table and name list and join them
pub fn parse_macro_presets(table_text: &str, names_text: &str) -> ParseResult<Vec<MacroPresetRecord>> {
    let names = parse_preset_names(names_text);
    let rows = parse_preset_rows(table_text)?;
    join_presets(names, rows)
}
