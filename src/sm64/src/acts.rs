//! Act mask decoding.
//!
//! `OBJECT_WITH_ACTS` takes a mask such as `ACT_1 | ACT_3` or the sentinel
//! `ALL_ACTS`. The mask is decoded into one flag per act, index 0 being act 1.

use crate::error::{ParseError, ParseResult};

/// Number of acts (stars) per course
pub const ACT_COUNT: usize = 6;

/// Sentinel meaning the object is present in every act
pub const ALL_ACTS: &str = "ALL_ACTS";

/// Separator between flags, exactly as written in level scripts
const ACT_SEPARATOR: &str = " | ";

const ACT_PREFIX: &str = "ACT_";

/// Per-act presence flags
pub type ActFlags = [bool; ACT_COUNT];

/// Flags for an object placed without a mask
pub const fn all_acts() -> ActFlags {
    [true; ACT_COUNT]
}

/// Decode a flag expression into `count` ordered booleans.
///
/// Flag indices are 1-based in the source and must fall inside `1..=count`.
pub fn decode_flags(expr: &str, count: usize) -> ParseResult<Vec<bool>> {
    if expr == ALL_ACTS {
        return Ok(vec![true; count]);
    }

    let mut flags = vec![false; count];
    for token in expr.split(ACT_SEPARATOR) {
        let index = parse_act_index(token)?;
        if index == 0 || index > count {
            return Err(ParseError::ActOutOfRange { index, count });
        }
        flags[index - 1] = true;
    }
    Ok(flags)
}

/// Decode an act mask into [`ActFlags`]
pub fn decode_acts(expr: &str) -> ParseResult<ActFlags> {
    let mut acts = [false; ACT_COUNT];
    acts.copy_from_slice(&decode_flags(expr, ACT_COUNT)?);
    Ok(acts)
}

fn parse_act_index(token: &str) -> ParseResult<usize> {
    token
        .strip_prefix(ACT_PREFIX)
        .and_then(|digits| digits.parse::<usize>().ok())
        .ok_or_else(|| ParseError::InvalidAct(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_acts_sentinel() {
        assert_eq!(decode_flags("ALL_ACTS", 6).unwrap(), vec![true; 6]);
        assert_eq!(decode_acts(ALL_ACTS).unwrap(), all_acts());
    }

    #[test]
    fn test_decode_two_acts() {
        assert_eq!(
            decode_flags("ACT_1 | ACT_3", 6).unwrap(),
            vec![true, false, true, false, false, false]
        );
    }

    #[test]
    fn test_decode_single_act() {
        assert_eq!(
            decode_acts("ACT_6").unwrap(),
            [false, false, false, false, false, true]
        );
    }

    #[test]
    fn test_decode_repeated_act() {
        assert_eq!(
            decode_acts("ACT_2 | ACT_2").unwrap(),
            [false, true, false, false, false, false]
        );
    }

    #[test]
    fn test_act_out_of_range() {
        assert_eq!(
            decode_acts("ACT_7"),
            Err(ParseError::ActOutOfRange { index: 7, count: 6 })
        );
        assert_eq!(
            decode_acts("ACT_0"),
            Err(ParseError::ActOutOfRange { index: 0, count: 6 })
        );
    }

    #[test]
    fn test_bare_pipe_is_not_a_separator() {
        // Only " | " separates flags
        assert_eq!(
            decode_acts("ACT_1|ACT_2"),
            Err(ParseError::InvalidAct("ACT_1|ACT_2".to_string()))
        );
    }

    #[test]
    fn test_missing_prefix() {
        assert!(matches!(decode_acts("STAR_1"), Err(ParseError::InvalidAct(_))));
        assert!(matches!(decode_acts("ACT_x"), Err(ParseError::InvalidAct(_))));
    }
}
