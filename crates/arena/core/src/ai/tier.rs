//! Intelligence behavior tiers.

use crate::stats::{CombatStyle, Intelligence};

/// Named intelligence band.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TierName {
    Novice,
    Intermediate,
    Advanced,
    Expert,
}

/// Behavior parameters for one intelligence band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BehaviorTier {
    pub name: TierName,
    pub min: u8,
    pub max: u8,
    /// Fraction of the special gauge at which the AI fires its special.
    pub special_threshold: f64,
    /// Combo length at which the AI shifts to a technical style.
    pub combo_max: u32,
    pub counter_probability: f64,
    pub evade_probability: f64,
    pub adaptation_rate: u32,
    pub style_preferences: &'static [CombatStyle],
}

impl BehaviorTier {
    pub fn contains(&self, intelligence: Intelligence) -> bool {
        (self.min..=self.max).contains(&intelligence.get())
    }

    /// Band holding `intelligence`.
    ///
    /// The table covers `[1, 100]` without gaps, so the fallback is never
    /// reached for a valid [`Intelligence`].
    pub fn for_intelligence(intelligence: Intelligence) -> &'static BehaviorTier {
        BEHAVIOR_TIERS
            .iter()
            .find(|tier| tier.contains(intelligence))
            .unwrap_or(&BEHAVIOR_TIERS[0])
    }
}

/// Ordered, non-overlapping partition of the intelligence range.
pub static BEHAVIOR_TIERS: [BehaviorTier; 4] = [
    BehaviorTier {
        name: TierName::Novice,
        min: 1,
        max: 30,
        special_threshold: 0.8,
        combo_max: 2,
        counter_probability: 0.2,
        evade_probability: 0.2,
        adaptation_rate: 1,
        style_preferences: &[CombatStyle::Aggressive],
    },
    BehaviorTier {
        name: TierName::Intermediate,
        min: 31,
        max: 60,
        special_threshold: 0.7,
        combo_max: 3,
        counter_probability: 0.5,
        evade_probability: 0.5,
        adaptation_rate: 5,
        style_preferences: &[CombatStyle::Aggressive, CombatStyle::Balanced],
    },
    BehaviorTier {
        name: TierName::Advanced,
        min: 61,
        max: 80,
        special_threshold: 0.6,
        combo_max: 4,
        counter_probability: 0.8,
        evade_probability: 0.8,
        adaptation_rate: 8,
        style_preferences: &[
            CombatStyle::Aggressive,
            CombatStyle::Balanced,
            CombatStyle::Technical,
        ],
    },
    BehaviorTier {
        name: TierName::Expert,
        min: 81,
        max: 100,
        special_threshold: 0.5,
        combo_max: 5,
        counter_probability: 0.9,
        evade_probability: 0.9,
        adaptation_rate: 10,
        style_preferences: &[
            CombatStyle::Aggressive,
            CombatStyle::Balanced,
            CombatStyle::Technical,
            CombatStyle::Evasive,
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_cover_full_range_without_gaps() {
        assert_eq!(BEHAVIOR_TIERS[0].min, Intelligence::MIN);
        assert_eq!(BEHAVIOR_TIERS[BEHAVIOR_TIERS.len() - 1].max, Intelligence::MAX);
        for pair in BEHAVIOR_TIERS.windows(2) {
            assert_eq!(pair[0].max + 1, pair[1].min);
        }
        for value in 1..=100 {
            let int = Intelligence::new(value);
            let matching = BEHAVIOR_TIERS.iter().filter(|t| t.contains(int)).count();
            assert_eq!(matching, 1, "intelligence {value}");
        }
    }

    #[test]
    fn band_edges() {
        let tier = |v| BehaviorTier::for_intelligence(Intelligence::new(v)).name;
        assert_eq!(tier(30), TierName::Novice);
        assert_eq!(tier(31), TierName::Intermediate);
        assert_eq!(tier(60), TierName::Intermediate);
        assert_eq!(tier(61), TierName::Advanced);
        assert_eq!(tier(81), TierName::Expert);
        assert_eq!(tier(100), TierName::Expert);
    }
}
