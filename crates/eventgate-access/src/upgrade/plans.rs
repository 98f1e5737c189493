//! Membership plan catalog shown on the upsell page.
//!
//! Plan contents are computed from the policy rules so the page cannot
//! advertise rights that enforcement does not grant.

use serde::Serialize;

use eventgate_core::{hierarchy, Tier, TierStatus};

use crate::policy::rules::creatable_tiers;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPlan {
    pub tier: Tier,
    pub name: String,
    /// Event tiers this plan may create.
    pub creatable: Vec<Tier>,
    /// Event tiers this plan may view and register for.
    pub viewable: Vec<Tier>,
    pub perks: Vec<&'static str>,
}

/// Plan for a plain tier.
pub fn plan_for(tier: Tier) -> MembershipPlan {
    plan_for_status(&TierStatus::new(tier))
}

/// Plan for any status, including student and mentor variants.
pub fn plan_for_status(status: &TierStatus) -> MembershipPlan {
    let mut name = status.base_tier.display_name().to_string();
    if status.is_student() {
        name.push_str(" Student");
    } else if status.is_mentor() {
        name.push_str(" Mentor");
    }

    let mut perks = base_perks(status.base_tier);
    if status.is_student() {
        perks.retain(|p| !p.starts_with("Create"));
        perks.push("Create Free events");
    }
    if status.is_mentor() {
        perks.push("Mentor badge on hosted events");
    }

    MembershipPlan {
        tier: status.base_tier,
        name,
        creatable: creatable_tiers(status).to_vec(),
        viewable: hierarchy(status.base_tier).to_vec(),
        perks,
    }
}

/// The four plain plans, lowest first.
pub fn all_plans() -> Vec<MembershipPlan> {
    Tier::ALL.iter().map(|t| plan_for(*t)).collect()
}

fn base_perks(tier: Tier) -> Vec<&'static str> {
    match tier {
        Tier::Free => vec!["Browse and register for Free events"],
        Tier::Silver => vec![
            "Register for Free and Silver events",
            "Create Free and Silver events",
        ],
        Tier::Gold => vec![
            "Register for events up to Gold",
            "Create events up to Gold",
            "Priority listing in search",
        ],
        Tier::Platinum => vec![
            "Register for every event",
            "Create events at any tier",
            "Priority listing in search",
            "Early access to Platinum events",
        ],
    }
}
