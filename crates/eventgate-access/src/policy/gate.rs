//! AccessGate — principal-facing entry point for creation and registration checks.
//!
//! Holds routing config only. The tier is read from the principal on every
//! call, so a membership change between page load and action is honored.

use serde::Serialize;
use tracing::debug;

use eventgate_core::config::UpgradeConfig;
use eventgate_core::{EventTier, Principal, TierStatus};

use super::decision::AccessDecision;
use super::rules::{validate_event_creation, validate_event_registration};
use crate::upgrade::{reason_for, upgrade_path, UpgradeAction, UpgradeReason};

/// Decision plus the routing data the caller needs after a denial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GateOutcome {
    pub decision: AccessDecision,
    /// Set only when denied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<UpgradeReason>,
    /// Upsell route, set only when denied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl GateOutcome {
    pub fn is_allowed(&self) -> bool {
        self.decision.allowed
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    upgrade: UpgradeConfig,
}

impl AccessGate {
    pub fn new(upgrade: UpgradeConfig) -> Self {
        Self { upgrade }
    }

    pub fn check_create(&self, principal: &Principal, event_tier: EventTier) -> GateOutcome {
        let status = principal.tier_status();
        let decision = validate_event_creation(&status, event_tier);
        self.finish(UpgradeAction::Create, principal, &status, event_tier, decision)
    }

    pub fn check_register(&self, principal: &Principal, event_tier: EventTier) -> GateOutcome {
        let status = principal.tier_status();
        let decision = validate_event_registration(&status, event_tier);
        self.finish(UpgradeAction::Register, principal, &status, event_tier, decision)
    }

    fn finish(
        &self,
        action: UpgradeAction,
        principal: &Principal,
        status: &TierStatus,
        event_tier: EventTier,
        decision: AccessDecision,
    ) -> GateOutcome {
        debug!(
            principal = %principal.key,
            action = action.as_str(),
            tier = status.base_tier.as_str(),
            event_tier = event_tier.as_str(),
            allowed = decision.allowed,
            "Access check"
        );

        if decision.allowed {
            return GateOutcome {
                decision,
                reason: None,
                redirect: None,
            };
        }

        let reason = reason_for(action, status, Some(event_tier));
        GateOutcome {
            decision,
            reason: Some(reason),
            redirect: Some(upgrade_path(reason, &self.upgrade)),
        }
    }
}
