//! Tier model tests: normalization scenarios and hierarchy laws.

use proptest::prelude::*;

use eventgate_core::errors::EventgateErrorCode;
use eventgate_core::{hierarchy, normalize, tier_includes, Principal, SpecialStatus, Tier, TierStatus};

fn arb_tier() -> impl Strategy<Value = Tier> {
    prop_oneof![
        Just(Tier::Free),
        Just(Tier::Silver),
        Just(Tier::Gold),
        Just(Tier::Platinum),
    ]
}

// ============================================================
// Normalization
// ============================================================

#[test]
fn student_label_scenario() {
    let status = normalize("silver(student)");
    assert_eq!(status.base_tier, Tier::Silver);
    assert!(status.is_student());
    assert!(!status.is_mentor());
}

#[test]
fn student_marker_overrides_written_base() {
    // Marker decides the base tier, not the text in front of it.
    assert_eq!(normalize("gold(student)").base_tier, Tier::Silver);
    assert_eq!(normalize("free(mentor)").base_tier, Tier::Platinum);
}

#[test]
fn neither_flag_is_the_default() {
    let status = normalize("gold");
    assert_eq!(status.special, SpecialStatus::None);
    assert!(status.recognized);
}

#[test]
fn strict_parse_reports_code() {
    let err = "diamond".parse::<Tier>().unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_TIER");
}

#[test]
fn principal_status_is_recomputed() {
    let mut principal = Principal::new("ana@example.com", "silver");
    assert_eq!(principal.tier_status(), TierStatus::new(Tier::Silver));
    principal.tier_label = "gold".to_string();
    assert_eq!(principal.tier_status(), TierStatus::new(Tier::Gold));
}

#[test]
fn principal_deserializes_camel_case() {
    let principal: Principal =
        serde_json::from_str(r#"{"key":"li@example.com","tierLabel":"platinum(mentor)"}"#).unwrap();
    assert!(principal.tier_status().is_mentor());
}

// ============================================================
// Hierarchy laws
// ============================================================

proptest! {
    #[test]
    fn prop_hierarchy_reflexive(tier in arb_tier()) {
        prop_assert!(tier_includes(tier, tier));
    }

    #[test]
    fn prop_hierarchy_size_tracks_rank(a in arb_tier(), b in arb_tier()) {
        if a < b {
            prop_assert!(hierarchy(a).len() < hierarchy(b).len());
        }
    }

    #[test]
    fn prop_includes_matches_ordering(ceiling in arb_tier(), tier in arb_tier()) {
        prop_assert_eq!(tier_includes(ceiling, tier), tier <= ceiling);
    }

    #[test]
    fn prop_normalize_never_panics(raw in ".{0,40}") {
        let status = normalize(&raw);
        prop_assert!(Tier::ALL.contains(&status.base_tier));
    }

    #[test]
    fn prop_plain_label_roundtrips(tier in arb_tier()) {
        prop_assert_eq!(normalize(&TierStatus::new(tier).to_label()), TierStatus::new(tier));
    }
}
