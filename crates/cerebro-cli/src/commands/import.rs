use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cbr import`.
pub async fn handle(args: &ImportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ctx
        .db()
        .import_jsonl(&args.file)
        .await
        .with_context(|| format!("failed to import {}", args.file.display()))?;

    if response.skipped > 0 {
        tracing::warn!(
            skipped = response.skipped,
            "some lines were skipped (malformed or already present)"
        );
    }

    output(&response, flags)
}
