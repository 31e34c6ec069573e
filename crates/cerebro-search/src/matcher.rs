//! Candidate filtering.
//!
//! Two passes run in sequence. [`raw_match`] keeps candidates where some
//! token appears in a stored text column or in the enrichment. [`coverage_match`]
//! then checks the query terms against a compact normalized text built from
//! the item's title, category, summary and topics.

use crate::fields::SearchableFields;
use crate::normalize::normalize;

/// Substring match of any token against the raw columns and the enrichment
/// title, topics and category.
///
/// An enrichment title at least `min_reverse_title_chars` long also matches
/// when it appears inside a token.
#[must_use]
pub fn raw_match(fields: &SearchableFields<'_>, tokens: &[String], min_reverse_title_chars: usize) -> bool {
    if tokens.is_empty() {
        return false;
    }

    let haystacks: Vec<String> = fields
        .texts
        .iter()
        .copied()
        .chain(fields.enrichment_title)
        .chain(fields.topics.iter().map(String::as_str))
        .chain(fields.category)
        .map(normalize)
        .filter(|text| !text.is_empty())
        .collect();

    if tokens
        .iter()
        .any(|token| haystacks.iter().any(|text| text.contains(token.as_str())))
    {
        return true;
    }

    fields.enrichment_title.map(normalize).is_some_and(|title| {
        title.chars().count() >= min_reverse_title_chars
            && tokens.iter().any(|token| token.contains(title.as_str()))
    })
}

/// Normalized text the coverage matcher searches: title, category (or the
/// kind name when there is none), summary and topics.
#[must_use]
pub fn coverage_text(fields: &SearchableFields<'_>) -> String {
    let category = fields.category.unwrap_or_else(|| fields.kind.as_str());
    let parts: Vec<&str> = fields
        .title
        .into_iter()
        .chain(std::iter::once(category))
        .chain(fields.summary)
        .chain(fields.topics.iter().map(String::as_str))
        .collect();
    normalize(&parts.join(" "))
}

/// Whether any term appears in [`coverage_text`], or any word of it appears
/// inside a term.
///
/// No terms accepts everything.
#[must_use]
pub fn coverage_match(fields: &SearchableFields<'_>, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let text = coverage_text(fields);
    let words: Vec<&str> = text.split_whitespace().collect();

    terms.iter().any(|term| {
        text.contains(term.as_str()) || words.iter().any(|word| term.contains(word))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Candidate;
    use crate::normalize::tokenize;
    use cerebro_core::entities::{Link, Note, SearchableItem};
    use cerebro_core::enums::ItemStatus;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn note(content: &str, enrichment: Option<&str>) -> Candidate {
        Candidate::new(SearchableItem::Note(Note {
            id: "n".into(),
            content: content.into(),
            status: ItemStatus::Processed,
            processed_path: None,
            topic: None,
            enrichment: enrichment.map(String::from),
            created_at: Utc::now(),
        }))
    }

    fn toks(query: &str) -> Vec<String> {
        tokenize(&normalize(query))
    }

    #[test]
    fn raw_match_finds_tokens_in_content_ignoring_accents() {
        let candidate = note("Tomar CAFÉ con leche", None);
        assert!(raw_match(&candidate.fields(), &toks("cafe"), 2));
        assert!(!raw_match(&candidate.fields(), &toks("te"), 2));
        assert!(!raw_match(&candidate.fields(), &toks("azucar"), 2));
    }

    #[test]
    fn raw_match_reads_enrichment_fields() {
        let candidate = note("", Some(r#"{"title":"Cita médica","topics":["salud"],"category":"personal"}"#));
        assert!(raw_match(&candidate.fields(), &toks("medica"), 2));
        assert!(raw_match(&candidate.fields(), &toks("salud"), 2));
        assert!(raw_match(&candidate.fields(), &toks("personal"), 2));
        assert!(!raw_match(&candidate.fields(), &toks("viaje"), 2));
    }

    #[test]
    fn raw_match_title_inside_token() {
        let candidate = note("", Some(r#"{"title":"IA"}"#));
        assert!(raw_match(&candidate.fields(), &toks("ia-generativa"), 2));

        let single = note("", Some(r#"{"title":"x"}"#));
        assert!(!raw_match(&single.fields(), &toks("xyz"), 2));
    }

    #[test]
    fn raw_match_without_tokens_is_false() {
        assert!(!raw_match(&note("algo", None).fields(), &[], 2));
    }

    #[test]
    fn coverage_text_uses_kind_when_uncategorized() {
        let candidate = note("", Some(r#"{"title":"Plan","summary":"Resumen","topics":["Física"]}"#));
        assert_eq!(coverage_text(&candidate.fields()), "plan note resumen fisica");
    }

    #[test]
    fn coverage_match_directions() {
        let candidate = Candidate::new(SearchableItem::Link(Link {
            id: "l".into(),
            url: "https://example.org".into(),
            title: Some("cafe con leche".into()),
            metadata: None,
            status: ItemStatus::Processed,
            processed_path: None,
            topic: None,
            enrichment: None,
            created_at: Utc::now(),
        }));
        let fields = candidate.fields();
        // term inside text
        assert!(coverage_match(&fields, &toks("CAFÉ")));
        // word inside term
        assert!(coverage_match(&fields, &toks("leches")));
        // short words count too
        assert!(coverage_match(&fields, &toks("xconx")));
        assert!(!coverage_match(&fields, &toks("xyzxyz-no-match")));
    }

    #[test]
    fn short_title_passes_both_matchers_inside_a_longer_token() {
        let candidate = note("", Some(r#"{"title":"IA"}"#));
        let tokens = toks("ia-generativa");
        assert!(raw_match(&candidate.fields(), &tokens, 2));
        assert!(coverage_match(&candidate.fields(), &tokens));
    }

    #[test]
    fn coverage_match_accepts_all_without_terms() {
        assert!(coverage_match(&note("", None).fields(), &[]));
    }
}
