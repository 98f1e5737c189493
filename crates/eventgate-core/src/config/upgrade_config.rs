//! Upgrade routing configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_UPGRADE_ROUTE;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UpgradeConfig {
    /// Route of the upsell page. Reason tokens are appended as `?reason=`.
    pub route: String,
}

impl Default for UpgradeConfig {
    fn default() -> Self {
        Self {
            route: DEFAULT_UPGRADE_ROUTE.to_string(),
        }
    }
}
