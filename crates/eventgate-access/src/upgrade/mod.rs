//! Upgrade advice for denied actions.
//!
//! ## Components
//! - **reason** — the closed reason-token vocabulary read by the router
//! - **advisor** — maps a denied action to a token, a target tier, a route
//! - **plans** — membership plan catalog for the upsell page

pub mod advisor;
pub mod plans;
pub mod reason;

pub use advisor::{reason_for, recommended_tier, upgrade_path};
pub use plans::{all_plans, plan_for, plan_for_status, MembershipPlan};
pub use reason::{UpgradeAction, UpgradeReason};
