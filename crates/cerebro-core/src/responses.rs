//! Search response types, serialized as camelCase JSON for API and CLI output.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemKind;

/// One ranked search hit, in the same shape for every kind.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    pub id: String,
    pub kind: ItemKind,
    pub title: String,
    pub filename: Option<String>,
    pub url: Option<String>,
    pub file_path: Option<String>,
    pub thumbnail_url: Option<String>,
    pub topic: Option<String>,
    pub ai_title: Option<String>,
    pub ai_summary: Option<String>,
    pub ai_tags: Vec<String>,
    pub ai_topics: Vec<String>,
    pub ai_category: Option<String>,
    pub processed_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub score: u32,
    /// Per-field score contributions, only present when explicitly requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explain: Option<ScoreBreakdown>,
}

/// Points an item earned per scored field, summed over all query tokens,
/// before and after the coverage multiplier.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub title: u32,
    pub topics: u32,
    pub topic: u32,
    pub keywords: u32,
    pub category: u32,
    pub locator: u32,
    /// Sum of every field above.
    pub raw: u32,
    /// Distinct query tokens that earned at least one point.
    pub matched_tokens: u32,
    pub total_tokens: u32,
    /// `raw` after the coverage multiplier, rounded.
    pub score: u32,
}

/// Response from `cbr search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    /// The kind filter actually applied (invalid filters are dropped).
    pub kind: Option<ItemKind>,
    /// True when results came from the recent-items broadened pass.
    pub fallback: bool,
    pub results: Vec<ScoredResult>,
    pub total_results: u32,
}

/// Response from `cbr import`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub imported: u32,
    pub skipped: u32,
    pub duration_ms: u64,
}
