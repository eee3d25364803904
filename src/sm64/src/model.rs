//! Model IDs from `include/model_ids.h`.
//!
//! Only literal IDs resolve:
//!
//! ```text
//! #define MODEL_MARIO                   0x01        // mario_geo
//! #define MODEL_BOB_BUBBLY_TREE         0x17        // bubbly_tree_geo
//! #define MODEL_CHECKERBOARD_PLATFORM   MODEL_LEVEL_GEOMETRY_0A   (skipped)
//! ```

use serde::Serialize;

use crate::schema::{Column, FieldValue, Record};

/// Prefix of every model constant definition
pub const MODEL_DEFINE_PREFIX: &str = "#define MODEL_";

/// Include guard of the header, defined without a value
pub const HEADER_GUARD: &str = "#define MODEL_IDS_H";

/// A model constant with a literal ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelRecord {
    pub model_name: String,
    pub model_id: u32,
}

impl ModelRecord {
    pub fn new(model_name: impl Into<String>, model_id: u32) -> Self {
        Self {
            model_name: model_name.into(),
            model_id,
        }
    }
}

impl Record for ModelRecord {
    const TABLE: &'static str = "model";

    const COLUMNS: &'static [Column] = &[Column::text("model_name"), Column::integer("model_id")];

    fn to_row(&self) -> Vec<FieldValue> {
        vec![self.model_name.as_str().into(), self.model_id.into()]
    }
}

/// Classification of a single header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelLine {
    /// A resolvable model definition
    Model(ModelRecord),
    /// The header's own include guard
    HeaderGuard,
    /// A model definition without a value
    MissingValue(String),
    /// A value that is not a literal, e.g. another `MODEL_*` constant
    Unresolved { model_name: String, value: String },
    /// Not a model definition
    Other,
}

/// Classify one trimmed line of the model header
pub fn parse_model_line(line: &str) -> ModelLine {
    if !line.starts_with(MODEL_DEFINE_PREFIX) {
        return ModelLine::Other;
    }

    let mut parts = line.split_whitespace().skip(1);
    let Some(model_name) = parts.next() else {
        return ModelLine::Other;
    };
    let Some(value) = parts.next() else {
        if line == HEADER_GUARD {
            return ModelLine::HeaderGuard;
        }
        return ModelLine::MissingValue(line.to_string());
    };

    match decode_model_id(value) {
        Some(model_id) => ModelLine::Model(ModelRecord::new(model_name, model_id)),
        None => ModelLine::Unresolved {
            model_name: model_name.to_string(),
            value: value.to_string(),
        },
    }
}

/// Decode a `0x` hexadecimal or plain decimal literal
pub fn decode_model_id(value: &str) -> Option<u32> {
    if let Some(hex) = value.strip_prefix("0x") {
        return u32::from_str_radix(hex, 16).ok();
    }
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        return value.parse().ok();
    }
    None
}

/// Lazily collect resolvable model IDs from the header text, in source order.
///
/// Definitions without a value (other than the include guard) are reported
/// as warnings; symbolic values are skipped.
pub fn parse_model_ids(text: &str) -> impl Iterator<Item = ModelRecord> + '_ {
    text.lines().filter_map(|line| match parse_model_line(line.trim()) {
        ModelLine::Model(model) => Some(model),
        ModelLine::MissingValue(line) => {
            tracing::warn!("Invalid line: {}", line);
            None
        }
        ModelLine::Unresolved { model_name, value } => {
            tracing::debug!("Skipping {} = {} (not a literal model id)", model_name, value);
            None
        }
        ModelLine::HeaderGuard | ModelLine::Other => None,
    })
}
