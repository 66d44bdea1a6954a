//! JSON rows to CSV text.

use serde_json::Value;

use crate::error::{CsvError, CsvResult};

/// Convert JSON text holding an array of objects into CSV.
///
/// See [`value_to_csv`] for the row and header rules.
pub fn json_to_csv(text: &str, has_headers: bool) -> CsvResult<String> {
    let value = awl_json::parse(text)?;
    value_to_csv(&value, has_headers)
}

/// Convert a parsed JSON array of objects into CSV text.
///
/// The first row's keys define the columns, in their own order; keys that
/// appear only in later rows are dropped, and a row missing a column gets
/// an empty cell. With `has_headers`, the column names are emitted as the
/// first line. Cells render as:
///
/// - `null`: empty;
/// - strings: their text, unquoted unless escaping demands it;
/// - numbers and booleans: their JSON form;
/// - nested arrays and objects: compact JSON.
///
/// A cell containing a comma, quote, or newline is wrapped in double
/// quotes with inner quotes doubled. Lines join with `'\n'` and the
/// output carries no trailing newline.
pub fn value_to_csv(value: &Value, has_headers: bool) -> CsvResult<String> {
    let rows = match value {
        Value::Array(rows) => rows,
        other => {
            return Err(CsvError::NotAnArray {
                kind: kind_name(other),
            })
        }
    };
    if rows.is_empty() {
        return Err(CsvError::EmptyArray);
    }

    let mut maps = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match row {
            Value::Object(map) => maps.push(map),
            other => {
                return Err(CsvError::RowNotObject {
                    index,
                    kind: kind_name(other),
                })
            }
        }
    }

    let headers: Vec<&str> = maps[0].keys().map(String::as_str).collect();

    let mut lines = Vec::with_capacity(maps.len() + 1);
    if has_headers {
        lines.push(
            headers
                .iter()
                .map(|h| escape_field(h))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    for map in maps {
        let line = headers
            .iter()
            .map(|header| {
                let cell = map.get(*header).map(cell_text).unwrap_or_default();
                escape_field(&cell)
            })
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
