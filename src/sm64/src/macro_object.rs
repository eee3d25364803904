//! Macro objects from level `macro.inc.c` files.
//!
//! ```text
//! MACRO_OBJECT(macro_goomba, 0, -1000, 0, 300),
//! MACRO_OBJECT_WITH_BEH_PARAM(macro_box_one_up, 0, 1200, 600, -200, 3),
//! MACRO_OBJECT_END(),
//! ```

use serde::Serialize;

use crate::error::ParseResult;
use crate::schema::{Column, FieldValue, Record};
use crate::shape::{parse_int, CallShape, RawBehParam};

/// An object placed through a macro preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacroObjectRecord {
    pub macro_name: String,
    pub level: String,
    pub yaw: i32,
    pub pos_x: i32,
    pub pos_y: i32,
    pub pos_z: i32,
    /// Undecoded behavior parameter of `MACRO_OBJECT_WITH_BEH_PARAM`, not stored
    pub beh_param: Option<RawBehParam>,
}

impl Record for MacroObjectRecord {
    const TABLE: &'static str = "macro_object";

    const COLUMNS: &'static [Column] = &[
        Column::text("macro_name"),
        Column::text("level"),
        Column::integer("yaw"),
        Column::integer("pos_x"),
        Column::integer("pos_y"),
        Column::integer("pos_z"),
    ];

    fn to_row(&self) -> Vec<FieldValue> {
        vec![
            self.macro_name.as_str().into(),
            self.level.as_str().into(),
            self.yaw.into(),
            self.pos_x.into(),
            self.pos_y.into(),
            self.pos_z.into(),
        ]
    }
}

/// Parse one trimmed line of a macro include.
///
/// `MACRO_OBJECT_END` and unrelated lines yield `Ok(None)`.
pub fn try_parse_macro_object(line: &str, level: &str) -> ParseResult<Option<MacroObjectRecord>> {
    let shape = match CallShape::recognize(line) {
        Some(shape @ (CallShape::MacroObject | CallShape::MacroObjectWithBehParam)) => shape,
        _ => return Ok(None),
    };

    let args = shape.split_args(line)?;
    let beh_param = match shape {
        CallShape::MacroObjectWithBehParam => Some(RawBehParam(args[5].clone())),
        _ => None,
    };

    Ok(Some(MacroObjectRecord {
        macro_name: args[0].clone(),
        level: level.to_string(),
        yaw: parse_int("yaw", &args[1])?,
        pos_x: parse_int("pos_x", &args[2])?,
        pos_y: parse_int("pos_y", &args[3])?,
        pos_z: parse_int("pos_z", &args[4])?,
        beh_param,
    }))
}

/// Lazily parse every macro object in a macro include
pub fn parse_macro_objects<'a>(
    text: &'a str,
    level: &'a str,
) -> impl Iterator<Item = ParseResult<MacroObjectRecord>> + 'a {
    text.lines()
        .filter_map(move |line| try_parse_macro_object(line.trim(), level).transpose())
}
