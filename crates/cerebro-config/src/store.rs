//! Item store location.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_db_path() -> String {
    ".cerebro/cerebro.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Local libSQL database file. `:memory:` is accepted for throwaway runs.
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

impl StoreConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.db_path.trim().is_empty() {
            return Err(ConfigError::invalid("store.db_path", "must not be empty"));
        }
        Ok(())
    }

    /// Whether the database lives only in memory.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.db_path == ":memory:"
    }
}
