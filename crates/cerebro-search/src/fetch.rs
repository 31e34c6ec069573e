//! Candidate fetching.
//!
//! One store query per kind, issued concurrently and joined in
//! [`ItemKind::ALL`] order. The storage predicate deliberately over-selects:
//! precision comes from the matchers afterwards.

use futures::future::try_join_all;

use cerebro_core::entities::SearchableItem;
use cerebro_core::enums::{ItemField, ItemKind};
use cerebro_core::store::{FindQuery, ItemStore};

use crate::error::SearchError;
use crate::normalize::ParsedQuery;

/// Storage query for one kind: processed items where any of the kind's text
/// columns or the enrichment payload contains the raw query or a token.
#[must_use]
pub fn candidate_query(kind: ItemKind, query: &ParsedQuery) -> FindQuery {
    let needles = query.needles();
    let mut find = FindQuery::processed(kind);
    for field in kind
        .text_fields()
        .iter()
        .copied()
        .chain(std::iter::once(ItemField::Enrichment))
    {
        for needle in &needles {
            find = find.or_contains(field, needle.as_str());
        }
    }
    find
}

/// Run `queries` concurrently and concatenate the results in query order.
///
/// # Errors
///
/// Returns [`SearchError::Store`] with the first store failure; no partial
/// results are returned.
pub async fn fetch_all<S: ItemStore>(
    store: &S,
    queries: &[FindQuery],
) -> Result<Vec<SearchableItem>, SearchError> {
    let batches = try_join_all(queries.iter().map(|q| store.find_many(q)))
        .await
        .map_err(SearchError::store)?;
    for (query, batch) in queries.iter().zip(&batches) {
        tracing::debug!(kind = %query.kind, count = batch.len(), filtered = query.is_filtered(), "fetched");
    }
    Ok(batches.into_iter().flatten().collect())
}

/// Fetch text-filtered candidates for every kind in `kinds`.
///
/// # Errors
///
/// Same as [`fetch_all`].
pub async fn fetch_candidates<S: ItemStore>(
    store: &S,
    kinds: &[ItemKind],
    query: &ParsedQuery,
) -> Result<Vec<SearchableItem>, SearchError> {
    let queries: Vec<FindQuery> = kinds
        .iter()
        .map(|kind| candidate_query(*kind, query))
        .collect();
    fetch_all(store, &queries).await
}
