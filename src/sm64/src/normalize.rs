//! Comment and whitespace stripping for single macro arguments.
//!
//! Decomp sources annotate call arguments inline, e.g.
//! `OBJECT(/*model*/ MODEL_NONE, /*pos*/ -1200, ...)`, so every field is
//! cleaned before it is coerced into a typed value.

const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";

/// Remove every closed `/* ... */` block from `fragment` and trim it.
///
/// Each `/*` is paired with the first `*/` starting after its `/`, so `/*/`
/// opens and closes at once. An unterminated `/*` (or a stray `*/` with no
/// opener before it) is left in place.
pub fn strip_comments_and_whitespace(fragment: &str) -> String {
    let mut text = fragment.to_string();

    while let Some(start) = text.find(COMMENT_OPEN) {
        let search = start + 1;
        let Some(offset) = text[search..].find(COMMENT_CLOSE) else {
            break;
        };
        text.replace_range(start..search + offset + COMMENT_CLOSE.len(), "");
    }

    text.trim().to_string()
}
