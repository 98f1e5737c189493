//! Tier inclusion table.
//!
//! Every hierarchy comparison in the workspace goes through [`hierarchy`] or
//! [`tier_includes`]. Do not add a second table.

use super::levels::Tier;

const FREE_SET: [Tier; 1] = [Tier::Free];
const SILVER_SET: [Tier; 2] = [Tier::Free, Tier::Silver];
const GOLD_SET: [Tier; 3] = [Tier::Free, Tier::Silver, Tier::Gold];
const PLATINUM_SET: [Tier; 4] = [Tier::Free, Tier::Silver, Tier::Gold, Tier::Platinum];

/// Tiers accessible from `tier`, lowest first. Always contains `tier` itself.
pub fn hierarchy(tier: Tier) -> &'static [Tier] {
    match tier {
        Tier::Free => &FREE_SET,
        Tier::Silver => &SILVER_SET,
        Tier::Gold => &GOLD_SET,
        Tier::Platinum => &PLATINUM_SET,
    }
}

/// Whether `tier` falls inside the hierarchy set of `ceiling`.
pub fn tier_includes(ceiling: Tier, tier: Tier) -> bool {
    hierarchy(ceiling).contains(&tier)
}
