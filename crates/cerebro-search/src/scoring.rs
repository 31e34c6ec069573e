//! Weighted relevance scoring.
//!
//! Each query term earns points from every field it hits: an exact hit when
//! the normalized field equals the term, a contains hit when the field
//! contains it. List fields (topics, keywords) only count their first
//! matching entry. The per-term sum is then scaled by how many distinct
//! terms matched at all:
//!
//! ```text
//! score = round(raw * (floor + (1 - floor) * matched / total))
//! ```

use cerebro_config::ScoreWeights;
use cerebro_core::responses::ScoreBreakdown;

use crate::fields::SearchableFields;
use crate::normalize::normalize;

/// Points for one field value against one term.
fn field_points(value: &str, term: &str, exact: u32, contains: u32) -> u32 {
    if value == term {
        exact
    } else if value.contains(term) {
        contains
    } else {
        0
    }
}

/// Points for the first entry of `values` that matches `term` at all.
fn first_match_points(values: &[String], term: &str, exact: u32, contains: u32) -> u32 {
    values
        .iter()
        .map(|value| field_points(value, term, exact, contains))
        .find(|points| *points > 0)
        .unwrap_or(0)
}

/// Scale `raw` by the fraction of matched terms.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn apply_coverage(raw: u32, matched: u32, total: u32, floor: f64) -> u32 {
    if total == 0 || raw == 0 {
        return 0;
    }
    let coverage = f64::from(matched) / f64::from(total);
    let multiplier = (1.0 - floor).mul_add(coverage, floor);
    (f64::from(raw) * multiplier).round().max(0.0) as u32
}

/// Per-field points for `fields` against `terms`, before and after coverage.
#[must_use]
pub fn score_breakdown(
    fields: &SearchableFields<'_>,
    terms: &[String],
    weights: &ScoreWeights,
    coverage_floor: f64,
) -> ScoreBreakdown {
    let title = fields.title.map(normalize);
    let topics: Vec<String> = fields.topics.iter().map(|t| normalize(t)).collect();
    let topic = fields.topic.map(normalize);
    let keywords: Vec<String> = fields.keywords.iter().map(|k| normalize(k)).collect();
    let category = fields.category.map(normalize);
    let locators: Vec<String> = fields.locators.iter().map(|l| normalize(l)).collect();

    let mut breakdown = ScoreBreakdown {
        total_tokens: u32::try_from(terms.len()).unwrap_or(u32::MAX),
        ..ScoreBreakdown::default()
    };

    for term in terms {
        let term = term.as_str();
        let title_pts = title.as_deref().map_or(0, |t| {
            field_points(t, term, weights.title_exact, weights.title_contains)
        });
        let topics_pts =
            first_match_points(&topics, term, weights.topics_exact, weights.topics_contains);
        let topic_pts = topic.as_deref().map_or(0, |t| {
            field_points(t, term, weights.topic_exact, weights.topic_contains)
        });
        let keywords_pts = first_match_points(
            &keywords,
            term,
            weights.keywords_exact,
            weights.keywords_contains,
        );
        let category_pts = category.as_deref().map_or(0, |c| {
            field_points(c, term, weights.category_exact, weights.category_contains)
        });
        let locator_pts = if locators.iter().any(|l| l.contains(term)) {
            weights.locator_contains
        } else {
            0
        };

        let term_total =
            title_pts + topics_pts + topic_pts + keywords_pts + category_pts + locator_pts;
        if term_total > 0 {
            breakdown.matched_tokens += 1;
        }
        breakdown.title += title_pts;
        breakdown.topics += topics_pts;
        breakdown.topic += topic_pts;
        breakdown.keywords += keywords_pts;
        breakdown.category += category_pts;
        breakdown.locator += locator_pts;
        breakdown.raw += term_total;
    }

    breakdown.score = apply_coverage(
        breakdown.raw,
        breakdown.matched_tokens,
        breakdown.total_tokens,
        coverage_floor,
    );
    breakdown
}

/// Final relevance score. Zero when no term matches or there are no terms.
#[must_use]
pub fn score(
    fields: &SearchableFields<'_>,
    terms: &[String],
    weights: &ScoreWeights,
    coverage_floor: f64,
) -> u32 {
    score_breakdown(fields, terms, weights, coverage_floor).score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Candidate;
    use crate::normalize::{normalize, tokenize};
    use cerebro_core::entities::{Link, Note, SearchableItem};
    use cerebro_core::enums::ItemStatus;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const FLOOR: f64 = 0.4;

    fn note(topic: Option<&str>, enrichment: Option<&str>) -> Candidate {
        Candidate::new(SearchableItem::Note(Note {
            id: "n".into(),
            content: "contenido".into(),
            status: ItemStatus::Processed,
            processed_path: None,
            topic: topic.map(String::from),
            enrichment: enrichment.map(String::from),
            created_at: Utc::now(),
        }))
    }

    fn terms(query: &str) -> Vec<String> {
        tokenize(&normalize(query))
    }

    fn weights() -> ScoreWeights {
        ScoreWeights::default()
    }

    #[test]
    fn exact_title_hit() {
        let candidate = note(None, Some(r#"{"title":"Salud"}"#));
        let b = score_breakdown(&candidate.fields(), &terms("salud"), &weights(), FLOOR);
        assert_eq!(b.title, 20);
        assert_eq!(b.raw, 20);
        assert_eq!(b.matched_tokens, 1);
        assert_eq!(b.score, 20);
    }

    #[test]
    fn every_field_contributes() {
        let candidate = note(
            Some("salud"),
            Some(r#"{"title":"Salud mental","topics":["bienestar","salud"],"keywords":["salud publica"],"category":"salud"}"#),
        );
        let b = score_breakdown(&candidate.fields(), &terms("SALUD"), &weights(), FLOOR);
        assert_eq!(b.title, 10);
        assert_eq!(b.topics, 15);
        assert_eq!(b.topic, 15);
        assert_eq!(b.keywords, 6);
        assert_eq!(b.category, 10);
        assert_eq!(b.locator, 0);
        assert_eq!(b.raw, 56);
        assert_eq!(b.score, 56);
    }

    #[test]
    fn only_first_matching_topic_counts() {
        // "saludable" contains the term and comes first, so the exact "salud" entry is not reached
        let candidate = note(None, Some(r#"{"topics":["viajes","saludable","salud"]}"#));
        let b = score_breakdown(&candidate.fields(), &terms("salud"), &weights(), FLOOR);
        assert_eq!(b.topics, 8);
    }

    #[test]
    fn locator_is_a_weak_signal() {
        let candidate = Candidate::new(SearchableItem::Link(Link {
            id: "l".into(),
            url: "https://recetas.example.org/tortilla".into(),
            title: None,
            metadata: None,
            status: ItemStatus::Processed,
            processed_path: None,
            topic: None,
            enrichment: None,
            created_at: Utc::now(),
        }));
        let b = score_breakdown(&candidate.fields(), &terms("tortilla"), &weights(), FLOOR);
        assert_eq!(b.locator, 3);
        assert_eq!(b.score, 3);
    }

    #[test]
    fn coverage_multiplier_scales_partial_matches() {
        let candidate = note(None, Some(r#"{"title":"Salud"}"#));
        // one of two terms: 20 * (0.4 + 0.6 * 0.5) = 14
        let b = score_breakdown(&candidate.fields(), &terms("salud viajes"), &weights(), FLOOR);
        assert_eq!(b.raw, 20);
        assert_eq!(b.matched_tokens, 1);
        assert_eq!(b.total_tokens, 2);
        assert_eq!(b.score, 14);
    }

    #[rstest]
    #[case("")]
    #[case("inexistente")]
    #[case("zzz yyy")]
    fn no_match_scores_zero(#[case] query: &str) {
        let candidate = note(Some("salud"), Some(r#"{"title":"Cita"}"#));
        assert_eq!(score(&candidate.fields(), &terms(query), &weights(), FLOOR), 0);
    }

    #[test]
    fn coverage_is_monotonic() {
        let w = weights();
        let query = terms("alfa beta gamma");
        let one = note(None, Some(r#"{"topics":["alfa"]}"#));
        let two = note(None, Some(r#"{"topics":["alfa beta"]}"#));
        let three = note(None, Some(r#"{"topics":["alfa beta gamma"]}"#));
        let s1 = score(&one.fields(), &query, &w, FLOOR);
        let s2 = score(&two.fields(), &query, &w, FLOOR);
        let s3 = score(&three.fields(), &query, &w, FLOOR);
        assert!(s1 <= s2 && s2 <= s3, "{s1} <= {s2} <= {s3}");
        assert!(s1 > 0);
    }

    #[rstest]
    #[case(0, 0, 3, 0)]
    #[case(20, 3, 3, 20)]
    #[case(20, 0, 3, 8)]
    #[case(10, 1, 2, 7)]
    fn apply_coverage_cases(
        #[case] raw: u32,
        #[case] matched: u32,
        #[case] total: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(apply_coverage(raw, matched, total, FLOOR), expected);
    }
}
