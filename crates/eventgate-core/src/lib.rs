//! # eventgate-core
//!
//! Foundation crate for the eventgate access engine.
//! Defines the tier model, principal and event types, errors, config,
//! tracing setup, and constants. `eventgate-access` builds on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tier;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::EventgateConfig;
pub use errors::{CoreError, CoreResult, EventgateErrorCode};
pub use tier::{hierarchy, normalize, tier_includes, EventTier, SpecialStatus, Tier, TierStatus};
pub use types::{Event, Principal};
