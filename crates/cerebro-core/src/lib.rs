//! # cerebro-core
//!
//! Core types, storage contract, and error types for Cerebro.
//!
//! This crate provides the foundational types shared across all Cerebro crates:
//! - Entity structs for every captured kind (notes, links, files, photos, audio, video)
//! - The [`entities::SearchableItem`] tagged union the search engine ranks
//! - Kind, status, and field enums
//! - The tolerant [`enrichment::Enrichment`] decoder for AI metadata payloads
//! - The [`store::ItemStore`] read contract consumed by the search engine
//! - Search response types
//! - Case and diacritic folding for text comparison
//! - Cross-cutting error types

pub mod enrichment;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod store;
pub mod text;
