//! Object placement extraction for the Super Mario 64 decompilation
//!
//! Reads the macro-style declarations in a decomp checkout and turns them
//! into flat records ready for tabular storage:
//!
//! - [`ObjectRecord`] from `OBJECT(...)` / `OBJECT_WITH_ACTS(...)` in level scripts
//! - [`MacroObjectRecord`] from `MACRO_OBJECT(...)` in level macro includes
//! - [`ModelRecord`] from `#define MODEL_*` in `include/model_ids.h`
//! - [`MacroPresetRecord`] from the macro preset table and its name enum
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let extraction = sm64::parse_repo(Path::new("sm64")).unwrap();
//! println!("{}", extraction.summary());
//! ```

pub mod acts;
pub mod error;
pub mod macro_object;
pub mod macro_preset;
pub mod model;
pub mod normalize;
pub mod object;
pub mod repo;
pub mod schema;
pub mod shape;

pub use acts::{decode_acts, decode_flags, ActFlags, ACT_COUNT, ALL_ACTS};
pub use error::{ParseError, ParseResult};
pub use macro_object::{parse_macro_objects, try_parse_macro_object, MacroObjectRecord};
pub use macro_preset::{
    join_presets, parse_macro_presets, parse_preset_names, parse_preset_rows, MacroPresetRecord,
    PresetRow,
};
pub use model::{parse_model_ids, parse_model_line, ModelLine, ModelRecord};
pub use normalize::strip_comments_and_whitespace;
pub use object::{parse_objects, try_parse_object, ObjectRecord};
pub use repo::{
    check_repo, parse_level, parse_repo, Extraction, ExtractionSummary, LevelRecords, RepoError,
    RepoResult,
};
pub use schema::{Column, FieldKind, FieldValue, Record};
pub use shape::{CallShape, RawBehParam};
