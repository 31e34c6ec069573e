//! JSONL bulk import.
//!
//! One [`SearchableItem`] per line, tagged by `"kind"`. Malformed lines and
//! ids already present are counted as skipped rather than aborting the import.

use std::path::Path;
use std::time::Instant;

use cerebro_core::entities::SearchableItem;
use cerebro_core::responses::ImportResponse;

use crate::CerebroDb;
use crate::error::DatabaseError;

impl CerebroDb {
    /// Import every item in a JSONL file.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Io` if the file cannot be opened, or a database
    /// error if an insert fails.
    pub async fn import_jsonl(&self, path: &Path) -> Result<ImportResponse, DatabaseError> {
        let start = Instant::now();
        let mut imported = 0u32;
        let mut skipped = 0u32;

        let lines = serde_jsonlines::json_lines::<SearchableItem, _>(path)?;
        for (idx, line) in lines.enumerate() {
            match line {
                Ok(item) => {
                    if self.insert_item(&item).await? {
                        imported += 1;
                    } else {
                        tracing::debug!(id = item.id(), kind = %item.kind(), "duplicate id, skipped");
                        skipped += 1;
                    }
                }
                Err(e) => {
                    tracing::warn!(line = idx + 1, error = %e, "skipping malformed import line");
                    skipped += 1;
                }
            }
        }

        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        tracing::info!(imported, skipped, duration_ms, "import finished");
        Ok(ImportResponse {
            imported,
            skipped,
            duration_ms,
        })
    }
}
