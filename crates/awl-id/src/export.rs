//! Batch export documents.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::generate::GeneratedId;

/// The JSON download shape: export instant, count, and the bare ids.
#[derive(Debug, Serialize)]
pub struct IdExport {
    pub generated_at: String,
    pub count: usize,
    pub uuids: Vec<String>,
}

impl IdExport {
    /// Snapshot a batch for export, stamped with the current instant.
    pub fn new(batch: &[GeneratedId]) -> Self {
        IdExport {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            count: batch.len(),
            uuids: batch.iter().map(|g| g.id.to_string()).collect(),
        }
    }
}

/// Render a batch as a pretty-printed JSON document.
pub fn export_json(batch: &[GeneratedId]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&IdExport::new(batch))
}

/// Render a batch as CSV: a `UUID,Generated At` header and one row per
/// id with its RFC 3339 creation instant.
pub fn export_csv(batch: &[GeneratedId]) -> String {
    let mut lines = Vec::with_capacity(batch.len() + 1);
    lines.push("UUID,Generated At".to_string());
    for entry in batch {
        lines.push(format!(
            "{},{}",
            entry.id,
            entry.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        ));
    }
    lines.join("\n")
}
