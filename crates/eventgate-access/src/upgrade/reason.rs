//! Reason tokens.
//!
//! The navigation layer routes on these exact strings. New denial reasons
//! are added here as variants, never composed ad hoc by callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use eventgate_core::{CoreError, EventTier, Tier};

/// Action a principal attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeAction {
    Create,
    Register,
}

impl UpgradeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Register => "register",
        }
    }
}

/// Machine-readable upgrade reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeReason {
    /// `create-event`: the account cannot create events at all.
    CreateEvent,
    /// `create-<tier>-event`
    CreateTierEvent(EventTier),
    /// `register-event`
    RegisterEvent,
    /// `register-<tier>-event`
    RegisterTierEvent(EventTier),
}

impl UpgradeReason {
    /// Every token the router must handle.
    pub fn vocabulary() -> Vec<UpgradeReason> {
        let mut all = vec![Self::CreateEvent, Self::RegisterEvent];
        all.extend(Tier::ALL.iter().map(|t| Self::CreateTierEvent(*t)));
        all.extend(Tier::ALL.iter().map(|t| Self::RegisterTierEvent(*t)));
        all
    }

    pub fn action(&self) -> UpgradeAction {
        match self {
            Self::CreateEvent | Self::CreateTierEvent(_) => UpgradeAction::Create,
            Self::RegisterEvent | Self::RegisterTierEvent(_) => UpgradeAction::Register,
        }
    }

    pub fn event_tier(&self) -> Option<EventTier> {
        match self {
            Self::CreateTierEvent(t) | Self::RegisterTierEvent(t) => Some(*t),
            Self::CreateEvent | Self::RegisterEvent => None,
        }
    }

    pub fn as_token(&self) -> String {
        match self {
            Self::CreateEvent => "create-event".to_string(),
            Self::RegisterEvent => "register-event".to_string(),
            Self::CreateTierEvent(t) => format!("create-{}-event", t.as_str()),
            Self::RegisterTierEvent(t) => format!("register-{}-event", t.as_str()),
        }
    }

    /// Parse a token. Tier segments must be exact lower-case tier names.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "create-event" => return Some(Self::CreateEvent),
            "register-event" => return Some(Self::RegisterEvent),
            _ => {}
        }
        let middle = token.strip_suffix("-event")?;
        if let Some(tier) = middle.strip_prefix("create-") {
            return exact_tier(tier).map(Self::CreateTierEvent);
        }
        if let Some(tier) = middle.strip_prefix("register-") {
            return exact_tier(tier).map(Self::RegisterTierEvent);
        }
        None
    }
}

fn exact_tier(s: &str) -> Option<Tier> {
    Tier::ALL.iter().copied().find(|t| t.as_str() == s)
}

impl fmt::Display for UpgradeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_token())
    }
}

impl FromStr for UpgradeReason {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::UnknownReason {
            token: s.to_string(),
        })
    }
}

impl Serialize for UpgradeReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_token())
    }
}

impl<'de> Deserialize<'de> for UpgradeReason {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
