//! Mapping of any item kind into the uniform [`ScoredResult`] shape.

use cerebro_config::PresentationConfig;
use cerebro_core::entities::SearchableItem;
use cerebro_core::responses::{ScoreBreakdown, ScoredResult};

use crate::fields::Candidate;

/// First `max_chars` characters of `text`.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Last path segment, accepting either separator.
fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Human-readable title for an item, derived per kind.
#[must_use]
pub fn display_title(item: &SearchableItem, title_chars: usize) -> String {
    match item {
        SearchableItem::Note(n) => truncate_chars(n.content.trim(), title_chars),
        SearchableItem::Link(l) => non_blank(l.title.as_deref())
            .map_or_else(|| truncate_chars(&l.url, title_chars), String::from),
        SearchableItem::File(f) => f.filename.clone(),
        SearchableItem::Photo(p) => p.filename.clone(),
        SearchableItem::Audio(a) => basename(&a.file_path).to_string(),
        SearchableItem::Video(v) => non_blank(v.title.as_deref())
            .unwrap_or_else(|| basename(&v.file_path))
            .to_string(),
    }
}

/// Public URL of a photo's stored file.
#[must_use]
pub fn thumbnail_url(prefix: &str, file_path: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        file_path.trim_start_matches('/')
    )
}

/// Build the result for a scored candidate. `breakdown` is attached as
/// `explain` only when `explain` is set.
#[must_use]
pub fn to_result(
    candidate: &Candidate,
    breakdown: ScoreBreakdown,
    config: &PresentationConfig,
    explain: bool,
) -> ScoredResult {
    let item = candidate.item();
    let enrichment = candidate.enrichment();

    let (filename, url, file_path, thumbnail) = match item {
        SearchableItem::Note(_) => (None, None, None, None),
        SearchableItem::Link(l) => (None, Some(l.url.clone()), None, None),
        SearchableItem::File(f) => (Some(f.filename.clone()), None, Some(f.file_path.clone()), None),
        SearchableItem::Photo(p) => (
            Some(p.filename.clone()),
            None,
            Some(p.file_path.clone()),
            Some(thumbnail_url(&config.thumbnail_prefix, &p.file_path)),
        ),
        SearchableItem::Audio(a) => (None, None, Some(a.file_path.clone()), None),
        SearchableItem::Video(v) => (None, None, Some(v.file_path.clone()), None),
    };

    ScoredResult {
        id: item.id().to_string(),
        kind: item.kind(),
        title: display_title(item, config.title_chars),
        filename,
        url,
        file_path,
        thumbnail_url: thumbnail,
        topic: item.topic().map(String::from),
        ai_title: enrichment.title.clone(),
        ai_summary: enrichment.summary.clone(),
        ai_tags: enrichment.topics.clone(),
        ai_topics: enrichment.topics.clone(),
        ai_category: enrichment.category.clone(),
        processed_path: item.processed_path().map(String::from),
        created_at: item.created_at(),
        score: breakdown.score,
        explain: explain.then_some(breakdown),
    }
}
