use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemStatus;

/// A saved URL, optionally with Open Graph preview data in `metadata`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Link {
    pub id: String,
    pub url: String,
    pub title: Option<String>,
    /// Raw preview payload (JSON text) as stored.
    pub metadata: Option<String>,
    pub status: ItemStatus,
    pub processed_path: Option<String>,
    pub topic: Option<String>,
    pub enrichment: Option<String>,
    pub created_at: DateTime<Utc>,
}
