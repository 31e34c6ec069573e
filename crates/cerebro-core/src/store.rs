//! Read contract between the search engine and item storage.
//!
//! The engine never writes. It asks a store for items of one kind, in one
//! status, optionally narrowed by an OR of case-insensitive substring
//! containment tests over named columns, newest first, optionally capped.

use std::future::Future;

use crate::entities::SearchableItem;
use crate::enums::{ItemField, ItemKind, ItemStatus};
use crate::text::folded_contains;

/// One containment test: `field` contains `needle`, ignoring case and diacritics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contains {
    pub field: ItemField,
    pub needle: String,
}

/// Result ordering requested from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recently created first.
    #[default]
    CreatedDesc,
}

/// A `find_many` request for a single kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindQuery {
    pub kind: ItemKind,
    pub status: ItemStatus,
    /// OR-combined containment tests. Empty means no text predicate at all.
    pub any_of: Vec<Contains>,
    pub order: SortOrder,
    pub limit: Option<u32>,
}

impl FindQuery {
    /// All `processed` items of `kind`, newest first, no text predicate, no cap.
    #[must_use]
    pub fn processed(kind: ItemKind) -> Self {
        Self {
            kind,
            status: ItemStatus::Processed,
            any_of: Vec::new(),
            order: SortOrder::CreatedDesc,
            limit: None,
        }
    }

    /// Add an OR-ed containment test. Blank needles and exact duplicates are skipped.
    #[must_use]
    pub fn or_contains(mut self, field: ItemField, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        if needle.trim().is_empty() {
            return self;
        }
        let clause = Contains { field, needle };
        if !self.any_of.contains(&clause) {
            self.any_of.push(clause);
        }
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether this query carries a text predicate.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.any_of.is_empty()
    }

    /// Evaluate the text predicate against an in-memory item.
    ///
    /// Containment ignores case and diacritics. An unfiltered query accepts
    /// every item.
    #[must_use]
    pub fn text_matches(&self, item: &SearchableItem) -> bool {
        if self.any_of.is_empty() {
            return true;
        }
        self.any_of.iter().any(|clause| {
            item.field_text(clause.field)
                .is_some_and(|text| folded_contains(text, &clause.needle))
        })
    }
}

/// Read-only item storage consumed by the search engine.
///
/// Implementations must honour every part of [`FindQuery`]: the status
/// equality filter, the OR of containment tests (folded with
/// [`crate::text::normalize`] on both sides), [`SortOrder`], and `limit`.
/// Errors are surfaced to search callers unchanged.
pub trait ItemStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn find_many(
        &self,
        query: &FindQuery,
    ) -> impl Future<Output = Result<Vec<SearchableItem>, Self::Error>> + Send;
}
