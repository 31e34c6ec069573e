//! Deduplication and ordering.

use std::collections::HashSet;

use cerebro_core::entities::SearchableItem;
use cerebro_core::enums::ItemKind;
use cerebro_core::responses::ScoredResult;

use crate::fields::Candidate;

/// Identity of a logical item across candidate lists.
pub trait ItemKey {
    fn item_key(&self) -> (ItemKind, &str);
}

impl ItemKey for SearchableItem {
    fn item_key(&self) -> (ItemKind, &str) {
        (self.kind(), self.id())
    }
}

impl ItemKey for Candidate {
    fn item_key(&self) -> (ItemKind, &str) {
        self.item().item_key()
    }
}

impl ItemKey for ScoredResult {
    fn item_key(&self) -> (ItemKind, &str) {
        (self.kind, self.id.as_str())
    }
}

/// Drop every item whose `(kind, id)` was already seen. First occurrence wins.
#[must_use]
pub fn dedupe<T: ItemKey>(items: Vec<T>) -> Vec<T> {
    let mut seen: HashSet<(ItemKind, String)> = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| {
            let (kind, id) = item.item_key();
            seen.insert((kind, id.to_string()))
        })
        .collect()
}

/// Sort by score, highest first. Equal scores keep their input order.
#[must_use]
pub fn rank(mut results: Vec<ScoredResult>) -> Vec<ScoredResult> {
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}
