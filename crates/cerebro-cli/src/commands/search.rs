use cerebro_core::enums::ItemKind;
use cerebro_core::responses::{ScoredResult, SearchResponse};
use serde::Serialize;

use crate::cli::root_commands::SearchArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Compact row for table output; JSON formats print the full response.
#[derive(Debug, Serialize)]
struct SearchRow<'a> {
    score: u32,
    kind: ItemKind,
    id: &'a str,
    title: &'a str,
    topic: &'a str,
}

impl<'a> From<&'a ScoredResult> for SearchRow<'a> {
    fn from(result: &'a ScoredResult) -> Self {
        Self {
            score: result.score,
            kind: result.kind,
            id: &result.id,
            title: &result.title,
            topic: result.topic.as_deref().unwrap_or("-"),
        }
    }
}

/// Handle `cbr search`.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(kind) = args.kind.as_deref() {
        if ItemKind::parse_filter(Some(kind)).is_none() {
            tracing::warn!(kind, "unknown kind filter ignored; searching all kinds");
        }
    }

    let response = ctx
        .engine
        .search_response(&args.query, args.kind.as_deref(), args.explain)
        .await?;

    render_response(&response, flags)
}

fn render_response(response: &SearchResponse, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table => {
            if response.fallback {
                tracing::info!("no direct matches; showing closest recent items");
            }
            let rows: Vec<SearchRow<'_>> = response.results.iter().map(SearchRow::from).collect();
            output(&rows, flags)
        }
        OutputFormat::Json | OutputFormat::Raw => output(response, flags),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn result() -> ScoredResult {
        ScoredResult {
            id: "lnk-1".into(),
            kind: ItemKind::Link,
            title: "Cafe con leche".into(),
            filename: None,
            url: Some("https://example.org/cafe".into()),
            file_path: None,
            thumbnail_url: None,
            topic: None,
            ai_title: None,
            ai_summary: None,
            ai_tags: Vec::new(),
            ai_topics: Vec::new(),
            ai_category: None,
            processed_path: None,
            created_at: Utc::now(),
            score: 30,
            explain: None,
        }
    }

    #[test]
    fn table_row_projects_key_columns() {
        let result = result();
        let row = serde_json::to_value(SearchRow::from(&result)).expect("row serializes");
        assert_eq!(row["score"], 30);
        assert_eq!(row["kind"], "link");
        assert_eq!(row["id"], "lnk-1");
        assert_eq!(row["title"], "Cafe con leche");
        assert_eq!(row["topic"], "-");
    }
}
