use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemStatus;

/// An uploaded or linked video.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub file_path: String,
    pub title: Option<String>,
    pub status: ItemStatus,
    pub processed_path: Option<String>,
    pub topic: Option<String>,
    pub enrichment: Option<String>,
    pub created_at: DateTime<Utc>,
}
