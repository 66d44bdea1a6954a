//! CSV text to JSON rows.

use serde_json::{Map, Value};

use crate::error::{CsvError, CsvResult};

/// Convert CSV text into a JSON array of objects.
///
/// With `has_headers`, the first line names the columns; without it, the
/// first line is data and columns are named `Column1..ColumnN` from its
/// width. Every following non-blank line becomes one object. All cell
/// values stay strings -- no type sniffing. Rules, in order:
///
/// - fields are split on commas outside double quotes, and `""` inside a
///   quoted field is a literal quote;
/// - every field is trimmed, so CRLF input and padded cells both work;
/// - a header that trims to nothing falls back to `Column<n>` (1-based);
/// - a row shorter than the header list fills in empty strings, and any
///   surplus fields are dropped.
///
/// Fields cannot span lines: the buffer is split on `'\n'` before quote
/// handling runs.
pub fn csv_to_json(text: &str, has_headers: bool) -> CsvResult<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CsvError::Empty);
    }

    let lines: Vec<&str> = trimmed.split('\n').collect();
    let first = split_fields(lines[0]);

    let (headers, data_lines): (Vec<String>, &[&str]) = if has_headers {
        let named = first
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                if name.is_empty() {
                    format!("Column{}", i + 1)
                } else {
                    name
                }
            })
            .collect();
        (named, &lines[1..])
    } else {
        ((1..=first.len()).map(|i| format!("Column{i}")).collect(), &lines[..])
    };

    let mut rows = Vec::new();
    for line in data_lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_fields(line);
        let mut row = Map::new();
        for (i, header) in headers.iter().enumerate() {
            let value = fields.get(i).cloned().unwrap_or_default();
            row.insert(header.clone(), Value::String(value));
        }
        rows.push(Value::Object(row));
    }

    Ok(Value::Array(rows))
}

/// Split one CSV line into trimmed fields, honoring double quotes.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
