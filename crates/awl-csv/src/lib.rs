//! CSV conversion for Awl.
//!
//! Header-driven conversion in both directions: CSV text to a JSON array
//! of string-valued objects, and a JSON array of objects back to CSV. The
//! dialect is deliberately small -- comma separator, double-quote
//! escaping, one record per line.
//!
//! # Key Types
//!
//! - [`csv_to_json`] -- Header line or synthesized `ColumnN` names
//! - [`json_to_csv`] / [`value_to_csv`] -- First row defines the columns
//! - [`CsvError`] -- Shape errors carry the offending row index

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{CsvError, CsvResult};
pub use reader::csv_to_json;
pub use writer::{json_to_csv, value_to_csv};
