//! Raw tier label normalization.
//!
//! Persisted labels embed special status in the string (`"silver(student)"`).
//! Labels are parsed once here into [`TierStatus`]; nothing downstream
//! re-inspects the raw string.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::levels::Tier;
use crate::constants::{MENTOR_MARKER, STUDENT_MARKER};

/// Orthogonal annotation on a base tier. Affects creation rights only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialStatus {
    #[default]
    None,
    /// Attached to silver. May only create free events.
    Student,
    /// Attached to platinum.
    Mentor,
}

/// Normalized tier of a principal. Recomputed per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierStatus {
    pub base_tier: Tier,
    pub special: SpecialStatus,
    /// False when the label did not parse and the `Free` fallback was used.
    pub recognized: bool,
}

impl TierStatus {
    /// Plain status with no special annotation.
    pub fn new(base_tier: Tier) -> Self {
        Self {
            base_tier,
            special: SpecialStatus::None,
            recognized: true,
        }
    }

    pub fn student() -> Self {
        Self {
            base_tier: Tier::Silver,
            special: SpecialStatus::Student,
            recognized: true,
        }
    }

    pub fn mentor() -> Self {
        Self {
            base_tier: Tier::Platinum,
            special: SpecialStatus::Mentor,
            recognized: true,
        }
    }

    pub fn is_student(&self) -> bool {
        self.special == SpecialStatus::Student
    }

    pub fn is_mentor(&self) -> bool {
        self.special == SpecialStatus::Mentor
    }

    pub fn is_free(&self) -> bool {
        self.base_tier == Tier::Free
    }

    /// Canonical persisted label, e.g. `"gold"` or `"silver(student)"`.
    pub fn to_label(&self) -> String {
        match self.special {
            SpecialStatus::None => self.base_tier.as_str().to_string(),
            SpecialStatus::Student => format!("{}{}", self.base_tier.as_str(), STUDENT_MARKER),
            SpecialStatus::Mentor => format!("{}{}", self.base_tier.as_str(), MENTOR_MARKER),
        }
    }
}

impl Default for TierStatus {
    fn default() -> Self {
        Self::new(Tier::FALLBACK)
    }
}

/// Normalize a raw tier label.
///
/// The student marker wins over the mentor marker; each forces its own base
/// tier regardless of what precedes it. Anything else is parsed as a plain
/// tier, and unrecognized labels degrade to `Free` with `recognized = false`.
pub fn normalize(raw: &str) -> TierStatus {
    let lowered = raw.to_ascii_lowercase();

    if lowered.contains(STUDENT_MARKER) {
        return TierStatus::student();
    }
    if lowered.contains(MENTOR_MARKER) {
        return TierStatus::mentor();
    }

    match Tier::parse(&lowered) {
        Some(tier) => TierStatus::new(tier),
        None => {
            warn!(label = raw, "Unrecognized tier label, treating as free");
            TierStatus {
                recognized: false,
                ..TierStatus::new(Tier::FALLBACK)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_label_forces_silver() {
        let status = normalize("silver(student)");
        assert_eq!(status.base_tier, Tier::Silver);
        assert!(status.is_student());
        assert!(!status.is_mentor());
    }

    #[test]
    fn mentor_label_forces_platinum() {
        let status = normalize("platinum(mentor)");
        assert_eq!(status.base_tier, Tier::Platinum);
        assert!(status.is_mentor());
        assert!(!status.is_student());
    }

    #[test]
    fn markers_are_case_insensitive() {
        assert!(normalize("Silver(Student)").is_student());
        assert!(normalize("PLATINUM(MENTOR)").is_mentor());
    }

    #[test]
    fn plain_labels_are_lowercased() {
        assert_eq!(normalize("Gold"), TierStatus::new(Tier::Gold));
        assert_eq!(normalize("free"), TierStatus::new(Tier::Free));
    }

    #[test]
    fn unknown_label_falls_back_to_free() {
        let status = normalize("diamond");
        assert_eq!(status.base_tier, Tier::Free);
        assert!(!status.recognized);
        assert_eq!(status.special, SpecialStatus::None);

        let empty = normalize("");
        assert_eq!(empty.base_tier, Tier::Free);
        assert!(!empty.recognized);
    }

    #[test]
    fn label_roundtrips_through_normalize() {
        for status in [
            TierStatus::new(Tier::Free),
            TierStatus::new(Tier::Silver),
            TierStatus::new(Tier::Gold),
            TierStatus::new(Tier::Platinum),
            TierStatus::student(),
            TierStatus::mentor(),
        ] {
            assert_eq!(normalize(&status.to_label()), status);
        }
    }
}
