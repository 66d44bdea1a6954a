//! UUID generation for Awl.
//!
//! Mints v4 (random) or v7 (time-ordered) ids in batches and renders the
//! batch as a JSON or CSV export document.

pub mod export;
pub mod generate;

pub use export::{export_csv, export_json, IdExport};
pub use generate::{generate, GeneratedId, IdVersion};
