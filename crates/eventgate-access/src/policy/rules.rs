//! Creation and registration rules.
//!
//! Students are the one asymmetry: they view and register like silver, but
//! may only create free events. Registration never looks at special status.

use smallvec::SmallVec;

use eventgate_core::{hierarchy, tier_includes, EventTier, Tier, TierStatus};

use super::decision::AccessDecision;

/// Set of event tiers a principal may create, lowest first.
pub type CreatableTiers = SmallVec<[EventTier; 4]>;

/// Whether the principal may create any event at all.
pub fn can_create_events(status: &TierStatus) -> bool {
    !status.is_free()
}

/// Event tiers the principal may pick when creating an event.
pub fn creatable_tiers(status: &TierStatus) -> CreatableTiers {
    if status.is_free() {
        return CreatableTiers::new();
    }
    if status.is_student() {
        return smallvec::smallvec![Tier::Free];
    }
    SmallVec::from_slice(hierarchy(status.base_tier))
}

/// Highest event tier the principal may create, `None` for free accounts.
pub fn max_creatable_tier(status: &TierStatus) -> Option<EventTier> {
    creatable_tiers(status).last().copied()
}

pub fn can_create_event_with_tier(status: &TierStatus, event_tier: EventTier) -> bool {
    if status.is_free() {
        return false;
    }
    if status.is_student() {
        return event_tier == Tier::Free;
    }
    tier_includes(status.base_tier, event_tier)
}

/// Registration depends on the base tier only.
pub fn can_register_for_event(status: &TierStatus, event_tier: EventTier) -> bool {
    tier_includes(status.base_tier, event_tier)
}

/// Check an event creation and explain a denial.
///
/// Checks run in order and the first failure wins, so a student creating a
/// paid-tier event gets the student message rather than the generic one.
pub fn validate_event_creation(status: &TierStatus, event_tier: EventTier) -> AccessDecision {
    if status.is_free() {
        return AccessDecision::deny(
            "Free users cannot create events",
            "Upgrade to Silver or above to start creating events.",
        );
    }

    if status.is_student() && event_tier != Tier::Free {
        return AccessDecision::deny(
            "Student accounts can only create Free events",
            "Student memberships include Silver-level access for attending events, \
             but can only create Free events. Upgrade to a full Silver membership \
             or above to create paid-tier events.",
        );
    }

    if !can_create_event_with_tier(status, event_tier) {
        let base = status.base_tier.display_name();
        let wanted = event_tier.display_name();
        let upgrade_message = match max_creatable_tier(status) {
            Some(max) => format!(
                "Your {base} membership can create events up to {} tier. \
                 Upgrade to {wanted} or above to create {wanted} events.",
                max.display_name()
            ),
            None => format!("Upgrade to {wanted} or above to create {wanted} events."),
        };
        return AccessDecision::deny(
            format!("{base} members cannot create {wanted} events"),
            upgrade_message,
        );
    }

    AccessDecision::allow()
}

/// Check a registration and explain a denial.
pub fn validate_event_registration(status: &TierStatus, event_tier: EventTier) -> AccessDecision {
    if can_register_for_event(status, event_tier) {
        return AccessDecision::allow();
    }
    let wanted = event_tier.display_name();
    AccessDecision::deny(
        format!("{wanted} events require a {wanted} membership or higher"),
        format!(
            "Your {} membership cannot register for this event. \
             Upgrade to {wanted} to attend.",
            status.base_tier.display_name()
        ),
    )
}
