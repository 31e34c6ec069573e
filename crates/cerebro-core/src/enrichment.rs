//! Decoding of the AI enrichment payload attached to captured items.
//!
//! The payload is written by the enrichment pipeline as JSON text and stored
//! verbatim. Readers must never fail on it: a missing, truncated, or
//! mistyped payload decodes to the neutral [`Enrichment`], and individual
//! fields with the wrong JSON type are dropped without discarding the rest.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// AI-derived metadata for a captured item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Enrichment {
    pub title: Option<String>,
    pub summary: Option<String>,
    /// Insertion order as produced by the pipeline; may contain duplicates.
    pub topics: Vec<String>,
    /// Secondary keyword list (`keywords`, or `tags` in older payloads).
    pub keywords: Vec<String>,
    pub category: Option<String>,
    pub language: Option<String>,
}

impl Enrichment {
    /// Decode a raw payload. Total: never panics, never errors.
    #[must_use]
    pub fn decode(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Self::from_map(&map),
            _ => Self::default(),
        }
    }

    /// True when no field carries any information.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.summary.is_none()
            && self.topics.is_empty()
            && self.keywords.is_empty()
            && self.category.is_none()
            && self.language.is_none()
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let keywords = match map.get("keywords") {
            Some(value) => string_list(value),
            None => map.get("tags").map(string_list).unwrap_or_default(),
        };
        Self {
            title: map.get("title").and_then(non_empty_string),
            summary: map.get("summary").and_then(non_empty_string),
            topics: map.get("topics").map(string_list).unwrap_or_default(),
            keywords,
            category: map.get("category").and_then(non_empty_string),
            language: map.get("language").and_then(non_empty_string),
        }
    }
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Accepts a JSON array of strings or a single comma-separated string.
/// Non-string array members and blank entries are skipped.
fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(non_empty_string).collect(),
        Value::String(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}
