use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Search(args) => super::search::handle(&args, ctx, flags).await,
        Commands::Import(args) => super::import::handle(&args, ctx, flags).await,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use cerebro_config::CerebroConfig;
    use pretty_assertions::assert_eq;

    use super::dispatch;
    use crate::cli::root_commands::ImportArgs;
    use crate::cli::{Commands, GlobalFlags, OutputFormat};
    use crate::context::AppContext;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            db: None,
        }
    }

    #[tokio::test]
    async fn import_then_search_against_on_disk_store() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let mut config = CerebroConfig::default();
        config.store.db_path = dir
            .path()
            .join("data")
            .join("cerebro.db")
            .to_string_lossy()
            .into_owned();

        let ctx = AppContext::init(config).await.expect("context should open");

        let mut file = tempfile::NamedTempFile::new().expect("jsonl file");
        writeln!(
            file,
            r#"{{"kind":"link","id":"lnk-1","url":"https://example.org/cafe","title":"Café con leche","status":"processed","created_at":"2026-03-01T10:00:00Z"}}"#
        )
        .expect("write line");
        writeln!(
            file,
            r#"{{"kind":"note","id":"nte-1","content":"Llamar al fontanero","status":"processed","created_at":"2026-03-02T10:00:00Z"}}"#
        )
        .expect("write line");
        file.flush().expect("flush");

        dispatch(
            Commands::Import(ImportArgs {
                file: file.path().to_path_buf(),
            }),
            &ctx,
            &flags(),
        )
        .await
        .expect("import should succeed");

        let results = ctx
            .engine
            .search("cafe", None)
            .await
            .expect("search should succeed");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "lnk-1");
        assert!(dir.path().join("data").is_dir());
    }

    #[tokio::test]
    async fn import_of_missing_file_reports_path() {
        let mut config = CerebroConfig::default();
        config.store.db_path = ":memory:".into();
        let ctx = AppContext::init(config).await.expect("context should open");

        let err = dispatch(
            Commands::Import(ImportArgs {
                file: "/definitely/not/here.jsonl".into(),
            }),
            &ctx,
            &flags(),
        )
        .await
        .expect_err("missing file should fail");
        assert!(format!("{err:#}").contains("here.jsonl"));
    }
}
