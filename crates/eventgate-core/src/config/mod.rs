pub mod logging_config;
pub mod search_config;
pub mod upgrade_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, CoreResult};

pub use logging_config::LoggingConfig;
pub use search_config::SearchConfig;
pub use upgrade_config::UpgradeConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EventgateConfig {
    pub search: SearchConfig,
    pub upgrade: UpgradeConfig,
    pub logging: LoggingConfig,
}

impl EventgateConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> CoreResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Reject values that would make filtering or routing meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if self.search.max_suggestions == 0 {
            return Err(CoreError::invalid_config(
                "search.max_suggestions",
                "must be at least 1",
            ));
        }
        if self.search.any_sentinel.trim().is_empty() {
            return Err(CoreError::invalid_config(
                "search.any_sentinel",
                "must not be empty",
            ));
        }
        if !self.upgrade.route.starts_with('/') {
            return Err(CoreError::invalid_config(
                "upgrade.route",
                "must be an absolute path starting with '/'",
            ));
        }
        Ok(())
    }
}
