//! Search and ranking configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_title_exact() -> u32 {
    20
}
const fn default_title_contains() -> u32 {
    10
}
const fn default_topics_exact() -> u32 {
    15
}
const fn default_topics_contains() -> u32 {
    8
}
const fn default_keywords_exact() -> u32 {
    12
}
const fn default_keywords_contains() -> u32 {
    6
}
const fn default_category_exact() -> u32 {
    10
}
const fn default_category_contains() -> u32 {
    5
}
const fn default_locator_contains() -> u32 {
    3
}

const fn default_coverage_floor() -> f64 {
    0.4
}
const fn default_significant_token_min_chars() -> usize {
    4
}
const fn default_min_reverse_title_chars() -> usize {
    2
}
const fn default_fallback_window() -> u32 {
    50
}
const fn default_true() -> bool {
    true
}

/// Points awarded per query token for each field match.
///
/// "Exact" means the normalized field equals the token, "contains" means it
/// contains the token.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScoreWeights {
    #[serde(default = "default_title_exact")]
    pub title_exact: u32,
    #[serde(default = "default_title_contains")]
    pub title_contains: u32,

    /// Enrichment topic list entries.
    #[serde(default = "default_topics_exact")]
    pub topics_exact: u32,
    #[serde(default = "default_topics_contains")]
    pub topics_contains: u32,

    /// The item's stored topic column, scored separately from the list.
    #[serde(default = "default_topics_exact")]
    pub topic_exact: u32,
    #[serde(default = "default_topics_contains")]
    pub topic_contains: u32,

    #[serde(default = "default_keywords_exact")]
    pub keywords_exact: u32,
    #[serde(default = "default_keywords_contains")]
    pub keywords_contains: u32,

    #[serde(default = "default_category_exact")]
    pub category_exact: u32,
    #[serde(default = "default_category_contains")]
    pub category_contains: u32,

    /// Awarded at most once per token when the filename or URL contains it.
    #[serde(default = "default_locator_contains")]
    pub locator_contains: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title_exact: default_title_exact(),
            title_contains: default_title_contains(),
            topics_exact: default_topics_exact(),
            topics_contains: default_topics_contains(),
            topic_exact: default_topics_exact(),
            topic_contains: default_topics_contains(),
            keywords_exact: default_keywords_exact(),
            keywords_contains: default_keywords_contains(),
            category_exact: default_category_exact(),
            category_contains: default_category_contains(),
            locator_contains: default_locator_contains(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SearchConfig {
    #[serde(default)]
    pub weights: ScoreWeights,

    /// Fraction of the raw score kept when only one of many tokens matched.
    /// Full coverage always keeps the whole raw score.
    #[serde(default = "default_coverage_floor")]
    pub coverage_floor: f64,

    /// Tokens with fewer characters are dropped from scoring unless every
    /// token is that short.
    #[serde(default = "default_significant_token_min_chars")]
    pub significant_token_min_chars: usize,

    /// Minimum enrichment title length for the title-inside-token match.
    #[serde(default = "default_min_reverse_title_chars")]
    pub min_reverse_title_chars: usize,

    /// Per-kind cap on recent items examined by the fallback pass.
    #[serde(default = "default_fallback_window")]
    pub fallback_window: u32,

    #[serde(default = "default_true")]
    pub fallback_enabled: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            coverage_floor: default_coverage_floor(),
            significant_token_min_chars: default_significant_token_min_chars(),
            min_reverse_title_chars: default_min_reverse_title_chars(),
            fallback_window: default_fallback_window(),
            fallback_enabled: true,
        }
    }
}

impl SearchConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.coverage_floor) {
            return Err(ConfigError::invalid(
                "search.coverage_floor",
                format!("must be within 0.0..=1.0, got {}", self.coverage_floor),
            ));
        }
        if self.fallback_window == 0 {
            return Err(ConfigError::invalid(
                "search.fallback_window",
                "must be greater than zero",
            ));
        }
        if self.significant_token_min_chars == 0 {
            return Err(ConfigError::invalid(
                "search.significant_token_min_chars",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = SearchConfig::default();
        assert_eq!(config.weights.title_exact, 20);
        assert_eq!(config.weights.title_contains, 10);
        assert_eq!(config.weights.topics_exact, 15);
        assert_eq!(config.weights.topic_contains, 8);
        assert_eq!(config.weights.keywords_exact, 12);
        assert_eq!(config.weights.category_contains, 5);
        assert_eq!(config.weights.locator_contains, 3);
        assert!((config.coverage_floor - 0.4).abs() < f64::EPSILON);
        assert_eq!(config.significant_token_min_chars, 4);
        assert_eq!(config.min_reverse_title_chars, 2);
        assert_eq!(config.fallback_window, 50);
        assert!(config.fallback_enabled);
    }

    #[test]
    fn rejects_out_of_range_floor() {
        let config = SearchConfig {
            coverage_floor: 1.5,
            ..SearchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "search.coverage_floor"
        ));
    }

    #[test]
    fn rejects_zero_window() {
        let config = SearchConfig {
            fallback_window: 0,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
