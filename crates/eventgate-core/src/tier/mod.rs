//! Membership tiers.
//!
//! ## Components
//! - **levels** — the four ordered tiers and their string forms
//! - **hierarchy** — the single tier inclusion table
//! - **status** — raw label normalization into base tier plus special status
//!
//! Unrecognized labels fall back to `Free` everywhere, so a bad label can
//! never grant more than the lowest tier.

pub mod hierarchy;
pub mod levels;
pub mod status;

pub use hierarchy::{hierarchy, tier_includes};
pub use levels::{EventTier, Tier};
pub use status::{normalize, SpecialStatus, TierStatus};
