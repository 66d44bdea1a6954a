//! Reserializing JSON values: pretty-printing and minifying.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::error::{JsonError, JsonResult};
use crate::parse::parse;

/// Indent width used when no explicit width is given.
pub const DEFAULT_INDENT: usize = 2;

/// Parse `text` and reserialize it pretty-printed with `indent` spaces
/// per nesting level.
///
/// Object key order survives the round trip. Widths below one are
/// clamped to one.
pub fn format(text: &str, indent: usize) -> JsonResult<String> {
    let value = parse(text)?;
    to_pretty_string(&value, indent)
}

/// Parse `text` and reserialize it with all insignificant whitespace
/// removed.
pub fn minify(text: &str) -> JsonResult<String> {
    let value = parse(text)?;
    Ok(value.to_string())
}

/// Pretty-print an already parsed value with `indent` spaces per level.
pub fn to_pretty_string(value: &Value, indent: usize) -> JsonResult<String> {
    let pad = vec![b' '; indent.max(1)];
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&pad));
    value
        .serialize(&mut ser)
        .map_err(|e| JsonError::Serialize(e.to_string()))?;
    String::from_utf8(out).map_err(|e| JsonError::Serialize(e.to_string()))
}

/// Render a value on a single line, for inline display next to a path.
pub fn to_compact_string(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_indents_two_spaces_by_default() {
        let out = format(r#"{"a":1,"b":[1,2]}"#, DEFAULT_INDENT).unwrap();
        assert_eq!(out, "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn format_respects_wider_indents() {
        let out = format(r#"{"a":1}"#, 4).unwrap();
        assert_eq!(out, "{\n    \"a\": 1\n}");
    }

    #[test]
    fn format_clamps_zero_width_to_one() {
        let out = format(r#"{"a":1}"#, 0).unwrap();
        assert_eq!(out, "{\n \"a\": 1\n}");
    }

    #[test]
    fn format_preserves_key_order() {
        let out = format(r#"{"z": 1, "a": 2}"#, 2).unwrap();
        let z = out.find("\"z\"").unwrap();
        let a = out.find("\"a\"").unwrap();
        assert!(z < a, "key order lost: {out}");
    }

    #[test]
    fn format_rejects_bad_input() {
        assert!(matches!(format("{", 2), Err(JsonError::Parse { .. })));
        assert_eq!(format("", 2).unwrap_err(), JsonError::Empty);
    }

    #[test]
    fn minify_strips_whitespace() {
        let out = minify("{\n  \"a\": 1,\n  \"b\": [1, 2]\n}").unwrap();
        assert_eq!(out, r#"{"a":1,"b":[1,2]}"#);
    }

    #[test]
    fn minify_then_format_round_trips_the_value() {
        let text = r#"{"outer": {"inner": [true, null, "x"]}}"#;
        let mini = minify(text).unwrap();
        let pretty = format(&mini, 2).unwrap();
        let a: Value = serde_json::from_str(text).unwrap();
        let b: Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn compact_rendering_is_single_line() {
        let value = json!({"a": [1, 2], "b": {"c": true}});
        let out = to_compact_string(&value);
        assert!(!out.contains('\n'));
        assert_eq!(out, r#"{"a":[1,2],"b":{"c":true}}"#);
    }

    #[test]
    fn scalars_format_bare() {
        assert_eq!(format("42", 2).unwrap(), "42");
        assert_eq!(format("\"s\"", 2).unwrap(), "\"s\"");
        assert_eq!(minify("  true  ").unwrap(), "true");
    }
}
