//! Principal record from the identity/profile collaborator.

use serde::{Deserialize, Serialize};

use crate::tier::{normalize, TierStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// Identifying key, usually the email address.
    pub key: String,
    /// Raw persisted tier label, e.g. `"silver(student)"`.
    #[serde(default)]
    pub tier_label: String,
}

impl Principal {
    pub fn new(key: impl Into<String>, tier_label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            tier_label: tier_label.into(),
        }
    }

    /// Normalized tier status. Computed on every call since the label can
    /// change between a page load and the next action.
    pub fn tier_status(&self) -> TierStatus {
        normalize(&self.tier_label)
    }
}
