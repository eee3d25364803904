//! Recognition of the macro call shapes found in level sources.
//!
//! Several shapes share a prefix (`OBJECT` / `OBJECT_WITH_ACTS`,
//! `MACRO_OBJECT` / `MACRO_OBJECT_END`), so recognition walks
//! [`CallShape::PRECEDENCE`] in order and returns the first match.

use serde::Serialize;

use crate::error::{ParseError, ParseResult};
use crate::normalize::strip_comments_and_whitespace;

/// Line terminator of every call shape
const CALL_TERMINATOR: &str = "),";

/// A known macro call shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallShape {
    /// `OBJECT_WITH_ACTS(model, x, y, z, rx, ry, rz, param, behavior, acts),`
    ObjectWithActs,
    /// `OBJECT(model, x, y, z, rx, ry, rz, param, behavior),`
    Object,
    /// `MACRO_OBJECT_END(),`
    MacroObjectEnd,
    /// `MACRO_OBJECT_WITH_BEH_PARAM(preset, yaw, x, y, z, param),`
    MacroObjectWithBehParam,
    /// `MACRO_OBJECT(preset, yaw, x, y, z),`
    MacroObject,
}

impl CallShape {
    /// Recognition order: specific shapes before the shorter prefixes they
    /// extend, terminators before the prefix they collide with.
    pub const PRECEDENCE: &'static [CallShape] = &[
        CallShape::ObjectWithActs,
        CallShape::Object,
        CallShape::MacroObjectEnd,
        CallShape::MacroObjectWithBehParam,
        CallShape::MacroObject,
    ];

    /// Macro name the line starts with
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::ObjectWithActs => "OBJECT_WITH_ACTS",
            Self::Object => "OBJECT",
            Self::MacroObjectEnd => "MACRO_OBJECT_END",
            Self::MacroObjectWithBehParam => "MACRO_OBJECT_WITH_BEH_PARAM",
            Self::MacroObject => "MACRO_OBJECT",
        }
    }

    /// Number of comma-separated arguments, `None` for terminators
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::ObjectWithActs => Some(10),
            Self::Object => Some(9),
            Self::MacroObjectEnd => None,
            Self::MacroObjectWithBehParam => Some(6),
            Self::MacroObject => Some(5),
        }
    }

    /// Find the shape of a trimmed source line
    pub fn recognize(line: &str) -> Option<CallShape> {
        Self::PRECEDENCE
            .iter()
            .copied()
            .find(|shape| line.starts_with(shape.prefix()))
    }

    /// Strip the call wrapper and split into normalized arguments.
    ///
    /// Fails with [`ParseError::Arity`] when the argument count does not
    /// match this shape. Terminators have no arguments and return an empty list.
    pub fn split_args(&self, line: &str) -> ParseResult<Vec<String>> {
        let Some(expected) = self.arity() else {
            return Ok(Vec::new());
        };

        let opener = format!("{}(", self.prefix());
        let inner = line.replacen(&opener, "", 1).replace(CALL_TERMINATOR, "");
        let args: Vec<String> = inner.split(',').map(strip_comments_and_whitespace).collect();

        if args.len() != expected {
            return Err(ParseError::Arity {
                expected,
                actual: args.len(),
                line: inner,
            });
        }
        Ok(args)
    }
}

/// Behavior parameter argument kept as its raw source token.
///
/// The parameter is an expression in the decomp (`0x00010000`, `BP(...)`,
/// symbolic constants) and is not decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawBehParam(pub String);

impl RawBehParam {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse a base-10 signed integer argument
pub(crate) fn parse_int(field: &'static str, value: &str) -> ParseResult<i32> {
    value.parse().map_err(|_| ParseError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}
