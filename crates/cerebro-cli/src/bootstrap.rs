use std::path::Path;

use anyhow::Context;
use cerebro_config::CerebroConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then layered config, then apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<CerebroConfig> {
    let mut config =
        CerebroConfig::load_with_dotenv().context("failed to load cerebro configuration")?;

    if let Some(db) = flags.db.as_deref() {
        config.store.db_path = db.to_string();
        config.validate().context("invalid --db override")?;
    }

    Ok(config)
}

/// Create the parent directory of an on-disk database path.
pub fn ensure_db_parent(db_path: &str) -> anyhow::Result<()> {
    if db_path == ":memory:" {
        return Ok(());
    }
    match Path::new(db_path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_db_parent;

    #[test]
    fn creates_missing_parent_directory() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let db_path = dir.path().join("nested").join("store").join("cerebro.db");

        ensure_db_parent(db_path.to_str().expect("utf-8 path")).expect("should create parent");

        assert!(dir.path().join("nested").join("store").is_dir());
    }

    #[test]
    fn memory_and_bare_paths_are_left_alone() {
        ensure_db_parent(":memory:").expect("memory is fine");
        ensure_db_parent("cerebro.db").expect("bare filename is fine");
    }
}
