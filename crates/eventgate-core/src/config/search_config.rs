//! Search and filter configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ANY_SENTINEL, DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_SUGGESTION_CHARS};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum suggestions returned for a search term. Default: 8.
    pub max_suggestions: usize,
    /// Minimum trimmed term length before suggestions are built. Default: 2.
    pub min_term_chars: usize,
    /// Selector value meaning "no filter". Default: "all".
    pub any_sentinel: String,
}

impl SearchConfig {
    /// Whether a selector value means "no filter": empty, or the sentinel.
    pub fn is_any(&self, value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty() || trimmed.eq_ignore_ascii_case(self.any_sentinel.trim())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            min_term_chars: DEFAULT_MIN_SUGGESTION_CHARS,
            any_sentinel: DEFAULT_ANY_SENTINEL.to_string(),
        }
    }
}
