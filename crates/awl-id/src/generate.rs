//! Minting fresh ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which UUID version to mint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdVersion {
    /// Fully random.
    #[default]
    V4,
    /// Time-ordered: ids sort by creation instant at millisecond
    /// granularity (ties within one millisecond fall back to random bits).
    V7,
}

/// One minted id and the instant it was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedId {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
}

/// Mint `count` fresh ids of the given version.
pub fn generate(count: usize, version: IdVersion) -> Vec<GeneratedId> {
    (0..count)
        .map(|_| GeneratedId {
            id: match version {
                IdVersion::V4 => Uuid::new_v4(),
                IdVersion::V7 => Uuid::now_v7(),
            },
            generated_at: Utc::now(),
        })
        .collect()
}
