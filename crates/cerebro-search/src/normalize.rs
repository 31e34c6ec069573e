//! Text normalization and query tokenization.
//!
//! Everything compared by the matchers and the scorer goes through
//! [`normalize`] first, so comparisons ignore case and diacritics.

pub use cerebro_core::text::normalize;

/// Split normalized text on whitespace runs, keeping the first occurrence of
/// each token.
#[must_use]
pub fn tokenize(normalized: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in normalized.split_whitespace() {
        if !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

/// Tokens with at least `min_chars` characters, or every token when none is
/// that long.
#[must_use]
pub fn significant_tokens(tokens: &[String], min_chars: usize) -> Vec<String> {
    let long: Vec<String> = tokens
        .iter()
        .filter(|t| t.chars().count() >= min_chars)
        .cloned()
        .collect();
    if long.is_empty() { tokens.to_vec() } else { long }
}

/// A search query after trimming, normalization and tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// The trimmed query as typed.
    pub raw: String,
    /// Every distinct normalized token.
    pub tokens: Vec<String>,
    /// The significant subset of `tokens`, used for coverage matching and scoring.
    pub terms: Vec<String>,
}

impl ParsedQuery {
    #[must_use]
    pub fn parse(raw: &str, significant_min_chars: usize) -> Self {
        let raw = raw.trim().to_string();
        let tokens = tokenize(&normalize(&raw));
        let terms = significant_tokens(&tokens, significant_min_chars);
        Self { raw, tokens, terms }
    }

    /// True when nothing but whitespace was typed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Substrings handed to the storage pre-filter: the raw query, each
    /// normalized token, then the alphanumeric pieces of tokens that contain
    /// punctuation. Stores fold both sides, so accents never matter.
    ///
    /// The pieces let a short enrichment title that sits inside a compound
    /// token (`"ia"` in `"ia-generativa"`) reach the matchers.
    #[must_use]
    pub fn needles(&self) -> Vec<String> {
        let pieces = self.tokens.iter().flat_map(|token| {
            token
                .split(|c: char| !c.is_alphanumeric())
                .filter(move |piece| !piece.is_empty() && *piece != token.as_str())
        });
        let mut needles = vec![self.raw.clone()];
        for needle in self.tokens.iter().map(String::as_str).chain(pieces) {
            if !needles.iter().any(|n| n == needle) {
                needles.push(needle.to_string());
            }
        }
        needles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("café", "cafe")]
    #[case("CAFÉ", "cafe")]
    #[case("  Médica  ", "medica")]
    #[case("Ñandú", "nandu")]
    #[case("über straße", "uber straße")]
    #[case("", "")]
    fn normalizes_case_and_diacritics(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn diacritic_insensitive() {
        assert_eq!(normalize("café"), normalize("cafe"));
    }

    #[test]
    fn tokenize_dedupes_in_first_seen_order() {
        assert_eq!(
            tokenize("plan de estudio de plan"),
            vec!["plan", "de", "estudio"]
        );
        assert!(tokenize("   \t\n ").is_empty());
    }

    #[rstest]
    #[case("Cita   Médica")]
    #[case("CAFÉ con café")]
    #[case("  a b  a ")]
    fn tokenization_is_idempotent(#[case] original: &str) {
        let once = tokenize(&normalize(original));
        let again = tokenize(&normalize(&once.join(" ")));
        assert_eq!(once, again);
    }

    #[test]
    fn significant_tokens_prefer_long_words() {
        let tokens = tokenize("plan de estudio");
        assert_eq!(significant_tokens(&tokens, 4), vec!["plan", "estudio"]);

        let short = tokenize("de la");
        assert_eq!(significant_tokens(&short, 4), short);
    }

    #[test]
    fn parsed_query_needles_are_raw_then_tokens() {
        let query = ParsedQuery::parse("  Cita Médica ", 4);
        assert_eq!(query.raw, "Cita Médica");
        assert_eq!(query.tokens, vec!["cita", "medica"]);
        assert_eq!(query.needles(), vec!["Cita Médica", "cita", "medica"]);

        let single = ParsedQuery::parse("salud", 4);
        assert_eq!(single.needles(), vec!["salud"]);

        let compound = ParsedQuery::parse("IA-generativa", 4);
        assert_eq!(
            compound.needles(),
            vec!["IA-generativa", "ia-generativa", "ia", "generativa"]
        );
    }

    #[test]
    fn blank_query_is_empty() {
        let query = ParsedQuery::parse(" \t ", 4);
        assert!(query.is_empty());
        assert!(query.tokens.is_empty());
        assert!(query.terms.is_empty());
    }
}
