//! Errors raised while turning source lines into records.

/// Errors that can occur while parsing a recognized line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line matched a known call prefix but has the wrong number of fields.
    /// This means the source uses a macro variant we do not handle yet.
    #[error("Invalid number of parts ({actual}, expected {expected}) in line: {line}")]
    Arity {
        expected: usize,
        actual: usize,
        line: String,
    },

    #[error("Invalid integer for {field}: {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("Invalid act flag: {0:?}")]
    InvalidAct(String),

    #[error("Act index {index} out of range 1..={count}")]
    ActOutOfRange { index: usize, count: usize },

    /// The macro preset name list and preset table have different lengths
    #[error("Macro preset count mismatch: {names} names but {rows} table rows")]
    PresetCountMismatch { names: usize, rows: usize },
}

/// Result type for line parsing
pub type ParseResult<T> = Result<T, ParseError>;
