use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemStatus;

/// An uploaded document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FileItem {
    pub id: String,
    pub filename: String,
    pub file_path: String,
    pub status: ItemStatus,
    pub processed_path: Option<String>,
    pub topic: Option<String>,
    pub enrichment: Option<String>,
    pub created_at: DateTime<Utc>,
}
