//! Result presentation settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_title_chars() -> usize {
    80
}

fn default_thumbnail_prefix() -> String {
    "/files".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PresentationConfig {
    /// Maximum characters of a derived title (note content, bare URLs).
    #[serde(default = "default_title_chars")]
    pub title_chars: usize,

    /// URL prefix under which stored photo files are served.
    #[serde(default = "default_thumbnail_prefix")]
    pub thumbnail_prefix: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            title_chars: default_title_chars(),
            thumbnail_prefix: default_thumbnail_prefix(),
        }
    }
}

impl PresentationConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.title_chars == 0 {
            return Err(ConfigError::invalid(
                "presentation.title_chars",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
