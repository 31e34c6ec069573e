//! Entity structs for every captured item kind.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation. [`SearchableItem`] is the tagged union handed to the search
//! engine.

mod audio;
mod file;
mod link;
mod note;
mod photo;
mod video;

pub use audio::Audio;
pub use file::FileItem;
pub use link::Link;
pub use note::Note;
pub use photo::Photo;
pub use video::Video;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ItemField, ItemKind, ItemStatus};

/// Any captured item, tagged by kind.
///
/// Serialized with an inline `"kind"` discriminator, which is also the JSONL
/// import format.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchableItem {
    Note(Note),
    Link(Link),
    File(FileItem),
    Photo(Photo),
    Audio(Audio),
    Video(Video),
}

/// Evaluate `$body` with `$item` bound to the inner struct of any variant.
macro_rules! each_variant {
    ($value:expr, $item:ident => $body:expr) => {
        match $value {
            SearchableItem::Note($item) => $body,
            SearchableItem::Link($item) => $body,
            SearchableItem::File($item) => $body,
            SearchableItem::Photo($item) => $body,
            SearchableItem::Audio($item) => $body,
            SearchableItem::Video($item) => $body,
        }
    };
}

impl SearchableItem {
    #[must_use]
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Note(_) => ItemKind::Note,
            Self::Link(_) => ItemKind::Link,
            Self::File(_) => ItemKind::File,
            Self::Photo(_) => ItemKind::Photo,
            Self::Audio(_) => ItemKind::Audio,
            Self::Video(_) => ItemKind::Video,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        each_variant!(self, item => item.id.as_str())
    }

    #[must_use]
    pub fn status(&self) -> ItemStatus {
        each_variant!(self, item => item.status)
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        each_variant!(self, item => item.created_at)
    }

    #[must_use]
    pub fn processed_path(&self) -> Option<&str> {
        each_variant!(self, item => item.processed_path.as_deref())
    }

    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        each_variant!(self, item => item.topic.as_deref())
    }

    /// Raw, undecoded enrichment payload.
    #[must_use]
    pub fn enrichment(&self) -> Option<&str> {
        each_variant!(self, item => item.enrichment.as_deref())
    }

    /// Raw stored text of `field`, or `None` when this kind has no such column
    /// or the column is empty.
    #[must_use]
    pub fn field_text(&self, field: ItemField) -> Option<&str> {
        let text = match (self, field) {
            (_, ItemField::Enrichment) => self.enrichment(),
            (Self::Note(n), ItemField::Content) => Some(n.content.as_str()),
            (Self::Link(l), ItemField::Url) => Some(l.url.as_str()),
            (Self::Link(l), ItemField::Title) => l.title.as_deref(),
            (Self::Link(l), ItemField::Metadata) => l.metadata.as_deref(),
            (Self::File(f), ItemField::Filename) => Some(f.filename.as_str()),
            (Self::File(f), ItemField::FilePath) => Some(f.file_path.as_str()),
            (Self::Photo(p), ItemField::Filename) => Some(p.filename.as_str()),
            (Self::Photo(p), ItemField::FilePath) => Some(p.file_path.as_str()),
            (Self::Audio(a), ItemField::FilePath) => Some(a.file_path.as_str()),
            (Self::Audio(a), ItemField::Transcription) => a.transcription.as_deref(),
            (Self::Video(v), ItemField::Title) => v.title.as_deref(),
            (Self::Video(v), ItemField::FilePath) => Some(v.file_path.as_str()),
            _ => None,
        };
        text.filter(|t| !t.is_empty())
    }
}
