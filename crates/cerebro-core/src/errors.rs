//! Cross-cutting error types for Cerebro.
//!
//! Domain-specific errors (`DatabaseError`, `SearchError`, `ConfigError`) are
//! defined in their respective crates. The CLI converges everything on
//! `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any Cerebro crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A kind string did not name any known item kind.
    #[error("Unknown item kind: {0}")]
    UnknownKind(String),

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
