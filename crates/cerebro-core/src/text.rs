//! Case and diacritic folding shared by the stores and the search engine.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercase, decompose (NFD), drop combining marks, trim.
///
/// `normalize("Café") == "cafe"`.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Whether `needle` occurs in `haystack` once both are folded.
///
/// A needle that folds to nothing never matches.
#[must_use]
pub fn folded_contains(haystack: &str, needle: &str) -> bool {
    let needle = normalize(needle);
    !needle.is_empty() && normalize(haystack).contains(needle.as_str())
}
