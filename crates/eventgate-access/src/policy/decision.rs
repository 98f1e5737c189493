//! Result of an access check.

use serde::{Deserialize, Serialize};

/// Outcome of a policy check. Denial is an expected result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_message: Option<String>,
}

impl AccessDecision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            error_reason: None,
            upgrade_message: None,
        }
    }

    pub fn deny(reason: impl Into<String>, upgrade_message: impl Into<String>) -> Self {
        Self {
            allowed: false,
            error_reason: Some(reason.into()),
            upgrade_message: Some(upgrade_message.into()),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn is_denied(&self) -> bool {
        !self.allowed
    }
}
