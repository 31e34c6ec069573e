//! # cerebro-search
//!
//! Token-based, multi-field relevance search over captured items.
//!
//! A query is normalized (case and diacritics folded) and split into tokens.
//! Each item kind is fetched concurrently from an [`ItemStore`] with a loose
//! substring pre-filter, then narrowed by two matchers, deduplicated by
//! `(kind, id)`, scored with a weighted per-field table and a coverage
//! multiplier, and returned as uniform [`ScoredResult`]s, best first.
//!
//! When nothing matches, the most recent items of each kind are re-examined
//! so that a plausible result is shown instead of an empty list.
//!
//! [`ItemStore`]: cerebro_core::store::ItemStore
//! [`ScoredResult`]: cerebro_core::responses::ScoredResult

pub mod engine;
pub mod error;
pub mod fallback;
pub mod fetch;
pub mod fields;
pub mod matcher;
pub mod memory;
pub mod normalize;
pub mod present;
pub mod rank;
pub mod scoring;

pub use engine::SearchEngine;
pub use error::SearchError;
pub use memory::MemoryStore;
