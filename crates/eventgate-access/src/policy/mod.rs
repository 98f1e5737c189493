//! Access policy — creation and registration rights per tier.
//!
//! ## Components
//! - **rules** — pure decision functions over a `TierStatus`
//! - **decision** — the `AccessDecision` value returned to callers
//! - **gate** — `AccessGate`, the principal-facing wrapper that attaches
//!   upgrade reasons and redirects to denials

pub mod decision;
pub mod gate;
pub mod rules;

pub use decision::AccessDecision;
pub use gate::{AccessGate, GateOutcome};
pub use rules::{
    can_create_event_with_tier, can_create_events, can_register_for_event, creatable_tiers,
    max_creatable_tier, validate_event_creation, validate_event_registration, CreatableTiers,
};
