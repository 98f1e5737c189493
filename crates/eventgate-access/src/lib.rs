//! # eventgate-access
//!
//! Decision layer over the tier model in `eventgate-core`:
//! - **policy** — who may create or register for an event of a given tier
//! - **visibility** — filtering and search suggestions over an event list
//! - **upgrade** — reason tokens, upgrade routing, and the plan catalog
//!
//! Every function takes the principal's tier status explicitly and does no
//! I/O. Decisions are recomputed per call and never cached.

pub mod policy;
pub mod upgrade;
pub mod visibility;

pub use policy::{AccessDecision, AccessGate, GateOutcome};
pub use upgrade::{reason_for, UpgradeAction, UpgradeReason};
pub use visibility::{build_suggestions, filter_events, FilterCriteria, Suggestion, SuggestionKind};
