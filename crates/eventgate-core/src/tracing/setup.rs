use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::constants::LOG_ENV_VAR;

/// Resolve the filter: `EVENTGATE_LOG` first, then the configured level,
/// then `info` if the configured directive does not parse.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global fmt subscriber.
///
/// Returns `false` when a subscriber was already installed, which makes it
/// safe to call from every entry point and from tests.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_target(config.with_target)
        .try_init()
        .is_ok()
}
