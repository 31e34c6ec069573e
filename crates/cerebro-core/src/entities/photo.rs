use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemStatus;

/// An uploaded image. Same shape as [`super::FileItem`]; kept distinct because
/// photos get a thumbnail in search results.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Photo {
    pub id: String,
    pub filename: String,
    pub file_path: String,
    pub status: ItemStatus,
    pub processed_path: Option<String>,
    pub topic: Option<String>,
    pub enrichment: Option<String>,
    pub created_at: DateTime<Utc>,
}
