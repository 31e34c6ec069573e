use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemStatus;

/// A voice memo or other recording, with its transcription once processed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Audio {
    pub id: String,
    pub file_path: String,
    pub transcription: Option<String>,
    pub status: ItemStatus,
    pub processed_path: Option<String>,
    pub topic: Option<String>,
    pub enrichment: Option<String>,
    pub created_at: DateTime<Utc>,
}
