//! Kind, status, and field enums for Cerebro.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for the representation used in SQL storage.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ItemKind
// ---------------------------------------------------------------------------

/// Kind of captured item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Note,
    Link,
    File,
    Photo,
    Audio,
    Video,
}

impl ItemKind {
    /// Every kind, in the order search merges per-kind candidate lists.
    pub const ALL: [Self; 6] = [
        Self::Note,
        Self::Link,
        Self::File,
        Self::Photo,
        Self::Audio,
        Self::Video,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Link => "link",
            Self::File => "file",
            Self::Photo => "photo",
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }

    /// Fields whose raw text the storage pre-filter may test for containment.
    ///
    /// The enrichment payload ([`ItemField::Enrichment`]) is shared by every kind
    /// and is not listed here.
    #[must_use]
    pub const fn text_fields(self) -> &'static [ItemField] {
        match self {
            Self::Note => &[ItemField::Content],
            Self::Link => &[ItemField::Url, ItemField::Title, ItemField::Metadata],
            Self::File | Self::Photo => &[ItemField::Filename, ItemField::FilePath],
            Self::Audio => &[ItemField::FilePath, ItemField::Transcription],
            Self::Video => &[ItemField::Title, ItemField::FilePath],
        }
    }

    /// Lenient parse for user-supplied kind filters: unknown values become `None`.
    #[must_use]
    pub fn parse_filter(value: Option<&str>) -> Option<Self> {
        value.and_then(|raw| raw.trim().parse().ok())
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ItemStatus
// ---------------------------------------------------------------------------

/// Triage status of a captured item.
///
/// ```text
/// pending → processed
///         → rejected
/// ```
///
/// Only `processed` items are eligible for search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Pending,
    Processed,
    Rejected,
}

impl ItemStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Processed, Self::Rejected],
            Self::Processed | Self::Rejected => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processed => "processed",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ItemField
// ---------------------------------------------------------------------------

/// A stored text column that a storage containment predicate can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemField {
    Content,
    Url,
    Title,
    Metadata,
    Filename,
    FilePath,
    Transcription,
    Enrichment,
}

impl ItemField {
    /// Column name in the relational schema.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Url => "url",
            Self::Title => "title",
            Self::Metadata => "metadata",
            Self::Filename => "filename",
            Self::FilePath => "file_path",
            Self::Transcription => "transcription",
            Self::Enrichment => "ai_data",
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
