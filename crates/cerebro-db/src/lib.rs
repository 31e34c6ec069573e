//! # cerebro-db
//!
//! libSQL storage for captured items.
//!
//! One table per item kind, each carrying the shared triage and enrichment
//! columns. [`CerebroDb`] implements [`cerebro_core::store::ItemStore`], the
//! read contract the search engine consumes, and offers the writes used by
//! `cbr import`.

pub mod error;
pub mod helpers;
mod import;
mod migrations;
pub mod repos;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for item storage.
///
/// Wraps a libSQL database and connection.
pub struct CerebroDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl CerebroDb {
    /// Open a local-only database at the given path.
    ///
    /// Runs migrations automatically on first open. Pass `":memory:"` for a
    /// throwaway database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let cerebro_db = Self { db, conn };
        cerebro_db.run_migrations().await?;
        tracing::debug!(path, "opened item store");
        Ok(cerebro_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
