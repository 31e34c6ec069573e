//! Search error types for cerebro-search.

/// Errors from a search query.
///
/// Every helper in the pipeline is total; only the storage boundary fails.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The item store failed. Display and source are the store's own.
    #[error(transparent)]
    Store(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl SearchError {
    pub(crate) fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store(Box::new(err))
    }
}
