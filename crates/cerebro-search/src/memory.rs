//! In-process [`ItemStore`] with call counters.
//!
//! Honours the same query semantics as the libSQL store and records how it
//! was called, so tests can assert that a search made no storage calls or
//! never reached the broadened pass.

use std::sync::atomic::{AtomicUsize, Ordering};

use cerebro_core::entities::SearchableItem;
use cerebro_core::enums::ItemKind;
use cerebro_core::store::{FindQuery, ItemStore, SortOrder};

/// Error raised by a [`MemoryStore`] told to fail a kind.
#[derive(Debug, thiserror::Error)]
pub enum MemoryStoreError {
    #[error("store unavailable for kind '{0}'")]
    Unavailable(ItemKind),
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Vec<SearchableItem>,
    failing: Option<ItemKind>,
    find_calls: AtomicUsize,
    unfiltered_calls: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new(items: Vec<SearchableItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Make every query for `kind` fail.
    #[must_use]
    pub fn failing_kind(mut self, kind: ItemKind) -> Self {
        self.failing = Some(kind);
        self
    }

    pub fn insert(&mut self, item: SearchableItem) {
        self.items.push(item);
    }

    /// Total `find_many` calls.
    #[must_use]
    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    /// `find_many` calls that carried no text predicate.
    #[must_use]
    pub fn unfiltered_calls(&self) -> usize {
        self.unfiltered_calls.load(Ordering::SeqCst)
    }

    pub fn reset_counters(&self) {
        self.find_calls.store(0, Ordering::SeqCst);
        self.unfiltered_calls.store(0, Ordering::SeqCst);
    }

    fn select(&self, query: &FindQuery) -> Vec<SearchableItem> {
        let mut found: Vec<SearchableItem> = self
            .items
            .iter()
            .filter(|item| item.kind() == query.kind && item.status() == query.status)
            .filter(|item| query.text_matches(item))
            .cloned()
            .collect();
        match query.order {
            SortOrder::CreatedDesc => found.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
        }
        if let Some(limit) = query.limit {
            found.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        found
    }
}

impl ItemStore for MemoryStore {
    type Error = MemoryStoreError;

    async fn find_many(&self, query: &FindQuery) -> Result<Vec<SearchableItem>, Self::Error> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if !query.is_filtered() {
            self.unfiltered_calls.fetch_add(1, Ordering::SeqCst);
        }
        if self.failing == Some(query.kind) {
            return Err(MemoryStoreError::Unavailable(query.kind));
        }
        Ok(self.select(query))
    }
}
