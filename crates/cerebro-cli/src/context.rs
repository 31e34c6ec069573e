use anyhow::Context;
use cerebro_config::CerebroConfig;
use cerebro_db::CerebroDb;
use cerebro_search::SearchEngine;

use crate::bootstrap;

/// Shared resources for command handlers.
pub struct AppContext {
    pub engine: SearchEngine<CerebroDb>,
}

impl AppContext {
    pub async fn init(config: CerebroConfig) -> anyhow::Result<Self> {
        let db_path = config.store.db_path.clone();
        bootstrap::ensure_db_parent(&db_path)?;

        let db = CerebroDb::open_local(&db_path)
            .await
            .with_context(|| format!("failed to open item store at {db_path}"))?;
        let engine = SearchEngine::new(db, &config);

        Ok(Self { engine })
    }

    /// The item store behind the engine.
    pub fn db(&self) -> &CerebroDb {
        self.engine.store()
    }
}
