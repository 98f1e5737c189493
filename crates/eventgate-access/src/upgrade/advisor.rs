//! Turns a denied action into a reason token, a target tier, and a route.

use eventgate_core::config::UpgradeConfig;
use eventgate_core::{EventTier, Tier, TierStatus};

use super::reason::{UpgradeAction, UpgradeReason};
use crate::policy::rules::{can_create_event_with_tier, can_create_events, can_register_for_event};

/// Reason token for an action. Pure string composition over the inputs;
/// callers decide whether the action was actually denied.
pub fn reason_for(
    action: UpgradeAction,
    status: &TierStatus,
    event_tier: Option<EventTier>,
) -> UpgradeReason {
    match (action, event_tier) {
        (UpgradeAction::Create, _) if status.is_free() => UpgradeReason::CreateEvent,
        (UpgradeAction::Create, Some(tier)) => UpgradeReason::CreateTierEvent(tier),
        (UpgradeAction::Create, None) => UpgradeReason::CreateEvent,
        (UpgradeAction::Register, Some(tier)) => UpgradeReason::RegisterTierEvent(tier),
        (UpgradeAction::Register, None) => UpgradeReason::RegisterEvent,
    }
}

/// Lowest plain tier that would permit the action, `None` if already allowed.
///
/// Creation needs at least Silver, so a student is pointed at a full Silver
/// membership.
pub fn recommended_tier(
    action: UpgradeAction,
    status: &TierStatus,
    event_tier: Option<EventTier>,
) -> Option<Tier> {
    match action {
        UpgradeAction::Create => {
            let allowed = match event_tier {
                Some(tier) => can_create_event_with_tier(status, tier),
                None => can_create_events(status),
            };
            if allowed {
                None
            } else {
                Some(event_tier.unwrap_or(Tier::Free).max(Tier::Silver))
            }
        }
        UpgradeAction::Register => {
            let tier = event_tier?;
            if can_register_for_event(status, tier) {
                None
            } else {
                Some(tier)
            }
        }
    }
}

/// Route to the upsell page carrying the reason, e.g. `/premium?reason=create-gold-event`.
pub fn upgrade_path(reason: UpgradeReason, config: &UpgradeConfig) -> String {
    format!("{}?reason={}", config.route, reason.as_token())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_creator_always_gets_generic_token() {
        let free = TierStatus::new(Tier::Free);
        assert_eq!(
            reason_for(UpgradeAction::Create, &free, Some(Tier::Gold)),
            UpgradeReason::CreateEvent
        );
        assert_eq!(reason_for(UpgradeAction::Create, &free, None), UpgradeReason::CreateEvent);
    }

    #[test]
    fn tiered_tokens_carry_event_tier() {
        let silver = TierStatus::new(Tier::Silver);
        assert_eq!(
            reason_for(UpgradeAction::Create, &silver, Some(Tier::Gold)).as_token(),
            "create-gold-event"
        );
        assert_eq!(
            reason_for(UpgradeAction::Register, &silver, Some(Tier::Platinum)).as_token(),
            "register-platinum-event"
        );
        assert_eq!(
            reason_for(UpgradeAction::Register, &silver, None).as_token(),
            "register-event"
        );
    }

    #[test]
    fn recommendations() {
        let free = TierStatus::new(Tier::Free);
        let student = TierStatus::student();
        let gold = TierStatus::new(Tier::Gold);

        assert_eq!(recommended_tier(UpgradeAction::Create, &free, None), Some(Tier::Silver));
        assert_eq!(
            recommended_tier(UpgradeAction::Create, &free, Some(Tier::Gold)),
            Some(Tier::Gold)
        );
        assert_eq!(
            recommended_tier(UpgradeAction::Create, &student, Some(Tier::Silver)),
            Some(Tier::Silver)
        );
        assert_eq!(recommended_tier(UpgradeAction::Create, &student, Some(Tier::Free)), None);
        assert_eq!(recommended_tier(UpgradeAction::Create, &gold, Some(Tier::Gold)), None);
        assert_eq!(
            recommended_tier(UpgradeAction::Register, &gold, Some(Tier::Platinum)),
            Some(Tier::Platinum)
        );
        assert_eq!(recommended_tier(UpgradeAction::Register, &free, None), None);
    }

    #[test]
    fn path_uses_configured_route() {
        let config = UpgradeConfig {
            route: "/membership".to_string(),
        };
        assert_eq!(
            upgrade_path(UpgradeReason::CreateTierEvent(Tier::Silver), &config),
            "/membership?reason=create-silver-event"
        );
        assert_eq!(
            upgrade_path(UpgradeReason::CreateEvent, &UpgradeConfig::default()),
            "/premium?reason=create-event"
        );
    }
}
