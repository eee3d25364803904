//! Placed objects from level scripts.
//!
//! Level `script.c` files place objects with one of two macros:
//!
//! ```text
//! OBJECT(MODEL_KOOPA, 100, 200, 300, 0, 90, 0, 0x00000000, bhvKoopa),
//! OBJECT_WITH_ACTS(MODEL_STAR, 1, 2, 3, 0, 0, 0, 0x01000000, bhvStar, ACT_1 | ACT_2),
//! ```
//!
//! The plain form is present in every act.

use serde::Serialize;

use crate::acts::{all_acts, decode_acts, ActFlags};
use crate::error::ParseResult;
use crate::schema::{Column, FieldValue, Record};
use crate::shape::{parse_int, CallShape, RawBehParam};

/// An object placed by a level script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)] // one column per act
pub struct ObjectRecord {
    pub model_name: String,
    pub level: String,
    pub initial_x: i32,
    pub initial_y: i32,
    pub initial_z: i32,
    pub initial_rot_x: i32,
    pub initial_rot_y: i32,
    pub initial_rot_z: i32,
    pub behavior: String,
    pub in_act_1: bool,
    pub in_act_2: bool,
    pub in_act_3: bool,
    pub in_act_4: bool,
    pub in_act_5: bool,
    pub in_act_6: bool,
    /// Undecoded behavior parameter, not stored
    pub beh_param: RawBehParam,
}

impl ObjectRecord {
    /// Act flags in act order
    pub fn acts(&self) -> ActFlags {
        [
            self.in_act_1,
            self.in_act_2,
            self.in_act_3,
            self.in_act_4,
            self.in_act_5,
            self.in_act_6,
        ]
    }
}

impl Record for ObjectRecord {
    const TABLE: &'static str = "object";

    const COLUMNS: &'static [Column] = &[
        Column::text("model_name"),
        Column::text("level"),
        Column::integer("initial_x"),
        Column::integer("initial_y"),
        Column::integer("initial_z"),
        Column::integer("initial_rot_x"),
        Column::integer("initial_rot_y"),
        Column::integer("initial_rot_z"),
        Column::text("behavior"),
        Column::boolean("in_act_1"),
        Column::boolean("in_act_2"),
        Column::boolean("in_act_3"),
        Column::boolean("in_act_4"),
        Column::boolean("in_act_5"),
        Column::boolean("in_act_6"),
    ];

    fn to_row(&self) -> Vec<FieldValue> {
        let mut row = vec![
            self.model_name.as_str().into(),
            self.level.as_str().into(),
            self.initial_x.into(),
            self.initial_y.into(),
            self.initial_z.into(),
            self.initial_rot_x.into(),
            self.initial_rot_y.into(),
            self.initial_rot_z.into(),
            self.behavior.as_str().into(),
        ];
        row.extend(self.acts().into_iter().map(FieldValue::from));
        row
    }
}

/// Parse one trimmed line of a level script.
///
/// Returns `Ok(None)` for lines that are not object placements.
pub fn try_parse_object(line: &str, level: &str) -> ParseResult<Option<ObjectRecord>> {
    let shape = match CallShape::recognize(line) {
        Some(shape @ (CallShape::Object | CallShape::ObjectWithActs)) => shape,
        _ => return Ok(None),
    };

    let args = shape.split_args(line)?;
    let acts = match shape {
        CallShape::ObjectWithActs => decode_acts(&args[9])?,
        _ => all_acts(),
    };

    Ok(Some(ObjectRecord {
        model_name: args[0].clone(),
        level: level.to_string(),
        initial_x: parse_int("initial_x", &args[1])?,
        initial_y: parse_int("initial_y", &args[2])?,
        initial_z: parse_int("initial_z", &args[3])?,
        initial_rot_x: parse_int("initial_rot_x", &args[4])?,
        initial_rot_y: parse_int("initial_rot_y", &args[5])?,
        initial_rot_z: parse_int("initial_rot_z", &args[6])?,
        beh_param: RawBehParam(args[7].clone()),
        behavior: args[8].clone(),
        in_act_1: acts[0],
        in_act_2: acts[1],
        in_act_3: acts[2],
        in_act_4: acts[3],
        in_act_5: acts[4],
        in_act_6: acts[5],
    }))
}

/// Lazily parse every object placement in a level script
pub fn parse_objects<'a>(
    text: &'a str,
    level: &'a str,
) -> impl Iterator<Item = ParseResult<ObjectRecord>> + 'a {
    text.lines()
        .filter_map(move |line| try_parse_object(line.trim(), level).transpose())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_parse_plain_object() {
        let line = "OBJECT(MODEL_KOOPA, 100, 200, 300, 0, 90, 0, 0, bhvKoopa),";
        let object = try_parse_object(line, "bob").unwrap().unwrap();

        assert_eq!(object.model_name, "MODEL_KOOPA");
        assert_eq!(object.level, "bob");
        assert_eq!(object.initial_x, 100);
        assert_eq!(object.initial_y, 200);
        assert_eq!(object.initial_z, 300);
        assert_eq!(object.initial_rot_y, 90);
        assert_eq!(object.behavior, "bhvKoopa");
        assert_eq!(object.acts(), [true; 6]);
    }

    #[test]
    fn test_parse_object_with_acts() {
        let line = "OBJECT_WITH_ACTS(MODEL_GOOMBA, 1,2,3,4,5,6,0,bhvGoomba, ACT_1 | ACT_2),";
        let object = try_parse_object(line, "wf").unwrap().unwrap();

        assert_eq!(object.model_name, "MODEL_GOOMBA");
        assert_eq!(object.initial_rot_z, 6);
        assert_eq!(object.behavior, "bhvGoomba");
        assert!(object.in_act_1);
        assert!(object.in_act_2);
        assert!(!object.in_act_3);
        assert!(!object.in_act_4);
        assert!(!object.in_act_5);
        assert!(!object.in_act_6);
    }

    #[test]
    fn test_parse_object_with_inline_comments() {
        let line = "OBJECT(/*model*/ MODEL_NONE, /*pos*/ -1328, 260, 4664, /*angle*/ 0, 180, 0, /*behParam*/ 0x00280000, /*beh*/ bhvCoinFormation),";
        let object = try_parse_object(line, "bob").unwrap().unwrap();

        assert_eq!(object.model_name, "MODEL_NONE");
        assert_eq!(object.initial_x, -1328);
        assert_eq!(object.initial_rot_y, 180);
        assert_eq!(object.beh_param.as_str(), "0x00280000");
        assert_eq!(object.behavior, "bhvCoinFormation");
    }

    #[test]
    fn test_missing_field_is_arity_error() {
        let line = "OBJECT(MODEL_KOOPA, 100, 200, 0, 90, 0, 0, bhvKoopa),";
        let err = try_parse_object(line, "bob").unwrap_err();
        assert!(matches!(err, ParseError::Arity { expected: 9, actual: 8, .. }));
    }

    #[test]
    fn test_with_acts_missing_mask_is_arity_error() {
        let line = "OBJECT_WITH_ACTS(MODEL_GOOMBA, 1, 2, 3, 4, 5, 6, 0, bhvGoomba),";
        let err = try_parse_object(line, "bob").unwrap_err();
        assert!(matches!(err, ParseError::Arity { expected: 10, actual: 9, .. }));
    }

    #[test]
    fn test_non_integer_position() {
        let line = "OBJECT(MODEL_KOOPA, x, 200, 300, 0, 90, 0, 0, bhvKoopa),";
        let err = try_parse_object(line, "bob").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidInteger {
                field: "initial_x",
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn test_unrelated_lines() {
        assert_eq!(try_parse_object("RETURN(),", "bob").unwrap(), None);
        assert_eq!(try_parse_object("MACRO_OBJECT(macro_goomba, 0, 1, 2, 3),", "bob").unwrap(), None);
        assert_eq!(try_parse_object("", "bob").unwrap(), None);
    }

    #[test]
    fn test_parse_objects_script() {
        let script = r#"
static const LevelScript script_func_local_1[] = {
    OBJECT(/*model*/ MODEL_BOB_CHAIN_CHOMP_GATE, /*pos*/ 1456, 768, 446, /*angle*/ 0, 326, 0, /*behParam*/ 0x00000000, /*beh*/ bhvChainChompGate),
    OBJECT_WITH_ACTS(/*model*/ MODEL_NONE, /*pos*/ -6000, 1000, 2400, /*angle*/ 0, 0, 0, /*behParam*/ 0x01000000, /*beh*/ bhvHiddenRedCoinStar, /*acts*/ ACT_5),
    RETURN(),
};
"#;
        let objects: Vec<_> = parse_objects(script, "bob").collect::<Result<_, _>>().unwrap();

        assert_eq!(objects.len(), 2);
        assert_eq!(objects[0].behavior, "bhvChainChompGate");
        assert_eq!(objects[1].acts(), [false, false, false, false, true, false]);
    }

    #[test]
    fn test_to_row_matches_columns() {
        let line = "OBJECT(MODEL_KOOPA, 100, 200, 300, 0, 90, 0, 0, bhvKoopa),";
        let object = try_parse_object(line, "bob").unwrap().unwrap();
        let row = object.to_row();

        assert_eq!(row.len(), ObjectRecord::COLUMNS.len());
        assert_eq!(row[0], FieldValue::Text("MODEL_KOOPA".to_string()));
        assert_eq!(row[1], FieldValue::Text("bob".to_string()));
        assert_eq!(row[8], FieldValue::Text("bhvKoopa".to_string()));
        assert_eq!(row[14], FieldValue::Integer(1));
    }
}
