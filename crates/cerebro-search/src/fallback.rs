//! Broadened recall pass.
//!
//! When nothing survives the matchers, the engine looks at the most recent
//! processed items of each kind, with no text predicate, and re-applies the
//! coverage matcher to them.

use cerebro_core::entities::SearchableItem;
use cerebro_core::enums::ItemKind;
use cerebro_core::store::{FindQuery, ItemStore};

use crate::error::SearchError;
use crate::fetch::fetch_all;

/// Unfiltered newest-first window of at most `window` items of `kind`.
#[must_use]
pub fn window_query(kind: ItemKind, window: u32) -> FindQuery {
    FindQuery::processed(kind).with_limit(window)
}

/// Fetch the recent window for every kind in `kinds`.
///
/// # Errors
///
/// Returns [`SearchError::Store`] if any kind's fetch fails.
pub async fn fetch_recent<S: ItemStore>(
    store: &S,
    kinds: &[ItemKind],
    window: u32,
) -> Result<Vec<SearchableItem>, SearchError> {
    let queries: Vec<FindQuery> = kinds.iter().map(|kind| window_query(*kind, window)).collect();
    fetch_all(store, &queries).await
}
