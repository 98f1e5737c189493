//! Filter criteria.

use eventgate_core::config::SearchConfig;
use eventgate_core::Tier;

/// Conjunctive filter. `None` in any slot means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: Option<String>,
    pub category: Option<String>,
    pub tier_ceiling: Option<Tier>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from raw page selectors. Empty strings and the "no
    /// filter" sentinel become `None`; the tier selector is parsed leniently.
    pub fn from_query(
        search_term: Option<&str>,
        category: Option<&str>,
        tier: Option<&str>,
        config: &SearchConfig,
    ) -> Self {
        let selected = |value: Option<&str>| {
            value
                .filter(|v| !config.is_any(v))
                .map(|v| v.trim().to_string())
        };
        Self {
            search_term: search_term
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            category: selected(category),
            tier_ceiling: selected(tier).map(|t| Tier::parse_lenient(&t)),
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tier_ceiling(mut self, tier: Tier) -> Self {
        self.tier_ceiling = Some(tier);
        self
    }

    /// True when no criterion constrains anything.
    pub fn is_empty(&self) -> bool {
        self.normalized_term().is_none()
            && self.normalized_category().is_none()
            && self.tier_ceiling.is_none()
    }

    /// Lower-cased, trimmed search term; `None` when blank.
    pub(crate) fn normalized_term(&self) -> Option<String> {
        normalize_text(self.search_term.as_deref())
    }

    /// Lower-cased, trimmed category; `None` when blank.
    pub(crate) fn normalized_category(&self) -> Option<String> {
        normalize_text(self.category.as_deref())
    }
}

fn normalize_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}
