//! JSON text boundary for Awl.
//!
//! Everything that touches raw JSON text lives here: parsing with 1-based
//! error positions, pretty-printing, minifying, and validity checks.
//! Parsed values keep their object key order, which the structural diff
//! and the formatters both rely on.
//!
//! # Key Types
//!
//! - [`JsonError`] -- Empty input vs. positioned parse failure
//! - [`parse`] / [`validate`] -- Text to value
//! - [`format`] / [`minify`] -- Value back to text

pub mod error;
pub mod format;
pub mod parse;

pub use error::{JsonError, JsonResult};
pub use format::{format, minify, to_compact_string, to_pretty_string, DEFAULT_INDENT};
pub use parse::{parse, validate};
