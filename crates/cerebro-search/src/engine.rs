//! The search pipeline.
//!
//! ```text
//! query -> tokens -> per-kind fetch (concurrent) -> raw match -> dedupe
//!       -> coverage match -> [empty: recent window -> dedupe -> coverage match]
//!       -> score -> rank -> present
//! ```

use cerebro_config::{CerebroConfig, PresentationConfig, SearchConfig};
use cerebro_core::enums::ItemKind;
use cerebro_core::responses::{ScoredResult, SearchResponse};
use cerebro_core::store::ItemStore;

use crate::error::SearchError;
use crate::fallback::fetch_recent;
use crate::fetch::fetch_candidates;
use crate::fields::Candidate;
use crate::matcher::{coverage_match, raw_match};
use crate::normalize::ParsedQuery;
use crate::present::to_result;
use crate::rank::{dedupe, rank};
use crate::scoring::score_breakdown;

/// Read-only search over an [`ItemStore`].
///
/// Holds no mutable state; concurrent queries share nothing but the store.
pub struct SearchEngine<S> {
    store: S,
    search: SearchConfig,
    presentation: PresentationConfig,
}

impl<S: ItemStore> SearchEngine<S> {
    #[must_use]
    pub fn new(store: S, config: &CerebroConfig) -> Self {
        Self::from_parts(store, config.search.clone(), config.presentation.clone())
    }

    #[must_use]
    pub const fn from_parts(store: S, search: SearchConfig, presentation: PresentationConfig) -> Self {
        Self {
            store,
            search,
            presentation,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Ranked results for `raw_query`.
    ///
    /// A blank query returns nothing without touching the store. `kind`
    /// restricts the search to one kind when it names one; anything else is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Store`] if any store call fails.
    pub async fn search(
        &self,
        raw_query: &str,
        kind: Option<&str>,
    ) -> Result<Vec<ScoredResult>, SearchError> {
        Ok(self.search_response(raw_query, kind, false).await?.results)
    }

    /// Like [`Self::search`], wrapped in a [`SearchResponse`] that records the
    /// applied kind filter and whether the broadened pass produced the
    /// results. With `explain`, every result carries its score breakdown.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Store`] if any store call fails.
    pub async fn search_response(
        &self,
        raw_query: &str,
        kind: Option<&str>,
        explain: bool,
    ) -> Result<SearchResponse, SearchError> {
        let query = ParsedQuery::parse(raw_query, self.search.significant_token_min_chars);
        let kind = ItemKind::parse_filter(kind);

        if query.is_empty() {
            return Ok(SearchResponse {
                query: query.raw,
                kind,
                fallback: false,
                results: Vec::new(),
                total_results: 0,
            });
        }

        tracing::debug!(raw = %query.raw, tokens = ?query.tokens, terms = ?query.terms, ?kind, "search");
        let kinds: Vec<ItemKind> = kind.map_or_else(|| ItemKind::ALL.to_vec(), |k| vec![k]);

        let fetched = fetch_candidates(&self.store, &kinds, &query).await?;
        let fetched_count = fetched.len();
        let raw_matched: Vec<Candidate> = fetched
            .into_iter()
            .map(Candidate::new)
            .filter(|c| raw_match(&c.fields(), &query.tokens, self.search.min_reverse_title_chars))
            .collect();
        let raw_matched = dedupe(raw_matched);
        let raw_count = raw_matched.len();
        let mut matched = self.coverage_filter(raw_matched, &query);
        tracing::debug!(fetched = fetched_count, raw_matched = raw_count, matched = matched.len(), "normal pass");

        let mut fallback = false;
        if matched.is_empty() && self.search.fallback_enabled {
            tracing::info!(query = %query.raw, window = self.search.fallback_window, "no matches, broadening to recent items");
            let recent = fetch_recent(&self.store, &kinds, self.search.fallback_window).await?;
            let recent: Vec<Candidate> = dedupe(recent).into_iter().map(Candidate::new).collect();
            matched = self.coverage_filter(recent, &query);
            fallback = !matched.is_empty();
            tracing::debug!(matched = matched.len(), "broadened pass");
        }

        let results = rank(
            matched
                .iter()
                .map(|candidate| {
                    let breakdown = score_breakdown(
                        &candidate.fields(),
                        &query.terms,
                        &self.search.weights,
                        self.search.coverage_floor,
                    );
                    to_result(candidate, breakdown, &self.presentation, explain)
                })
                .collect(),
        );

        Ok(SearchResponse {
            query: query.raw,
            kind,
            fallback,
            total_results: u32::try_from(results.len()).unwrap_or(u32::MAX),
            results,
        })
    }

    fn coverage_filter(&self, candidates: Vec<Candidate>, query: &ParsedQuery) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|c| coverage_match(&c.fields(), &query.terms))
            .collect()
    }
}

impl<S> std::fmt::Debug for SearchEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("search", &self.search)
            .field("presentation", &self.presentation)
            .finish_non_exhaustive()
    }
}

