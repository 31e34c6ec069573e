use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemStatus;

/// A free-text note captured into the inbox.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub content: String,
    pub status: ItemStatus,
    pub processed_path: Option<String>,
    pub topic: Option<String>,
    /// Raw enrichment payload as stored; decode with [`crate::enrichment::Enrichment::decode`].
    pub enrichment: Option<String>,
    pub created_at: DateTime<Utc>,
}
