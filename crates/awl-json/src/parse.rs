//! Parsing raw text into JSON values with positioned errors.

use serde_json::Value;

use crate::error::{JsonError, JsonResult};

/// Parse a raw text buffer into a JSON value.
///
/// Blank input (empty or whitespace-only) is rejected up front as
/// [`JsonError::Empty`], so callers can tell "nothing was entered" apart
/// from a syntax error. Parse failures carry the 1-based line and column
/// where the parser gave up.
pub fn parse(text: &str) -> JsonResult<Value> {
    if text.trim().is_empty() {
        return Err(JsonError::Empty);
    }
    serde_json::from_str(text).map_err(|e| JsonError::Parse {
        line: e.line(),
        column: e.column(),
        message: strip_position(&e.to_string()),
    })
}

/// Check a text buffer for JSON validity without keeping the value.
pub fn validate(text: &str) -> JsonResult<()> {
    parse(text).map(|_| ())
}

// serde_json appends " at line L column C" to its messages; the position
// already travels in structured fields, so drop the suffix.
fn strip_position(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}
