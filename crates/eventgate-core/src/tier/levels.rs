//! The four membership tiers, lowest first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;

/// Ordered membership tier. Derived `Ord` follows declaration order, so
/// `Free < Silver < Gold < Platinum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Silver,
    Gold,
    Platinum,
}

/// Tier attached to an event. Same values as a membership tier.
pub type EventTier = Tier;

impl Tier {
    /// All tiers in rank order.
    pub const ALL: [Tier; 4] = [Self::Free, Self::Silver, Self::Gold, Self::Platinum];

    /// Tier applied when a label cannot be parsed.
    pub const FALLBACK: Tier = Self::Free;

    /// Zero-based rank, `Free` = 0.
    pub fn rank(&self) -> usize {
        *self as usize
    }

    /// Lower-case token used in persisted labels and reason tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        }
    }

    /// Capitalized label for user-facing messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }

    /// Parse a tier, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Some(Self::Free),
            "silver" => Some(Self::Silver),
            "gold" => Some(Self::Gold),
            "platinum" => Some(Self::Platinum),
            _ => None,
        }
    }

    /// Parse a tier, falling back to `Free` for anything unrecognized.
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::FALLBACK)
    }

    /// Next tier up, `None` at the top.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Free => Some(Self::Silver),
            Self::Silver => Some(Self::Gold),
            Self::Gold => Some(Self::Platinum),
            Self::Platinum => None,
        }
    }
}

impl Default for Tier {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::UnknownTier {
            label: s.to_string(),
        })
    }
}

/// Serde helper for records written by other systems: unknown, null, or
/// missing tier values become `Free` instead of failing the whole record.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Tier, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().map(Tier::parse_lenient).unwrap_or_default())
}
