//! Training difficulty tiers.

use serde::{Deserialize, Serialize};

/// Difficulty of a training battle against a generated opponent.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TrainingDifficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl TrainingDifficulty {
    /// Level of the generated opponent.
    pub const fn opponent_level(self) -> u32 {
        match self {
            Self::Easy => 5,
            Self::Medium => 15,
            Self::Hard => 25,
            Self::Expert => 35,
        }
    }

    /// Multiplier on the trainee's experience, applied on a win only.
    pub const fn xp_multiplier(self) -> u64 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Expert => 4,
        }
    }

    pub const fn energy_cost(self) -> u32 {
        match self {
            Self::Easy => 5,
            Self::Medium => 10,
            Self::Hard => 15,
            Self::Expert => 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            TrainingDifficulty::from_str("Expert").unwrap(),
            TrainingDifficulty::Expert
        );
        assert!(TrainingDifficulty::from_str("nightmare").is_err());
    }

    #[test]
    fn harder_tiers_cost_and_pay_more() {
        let tiers: Vec<_> = TrainingDifficulty::iter().collect();
        for pair in tiers.windows(2) {
            assert!(pair[1].opponent_level() > pair[0].opponent_level());
            assert!(pair[1].xp_multiplier() > pair[0].xp_multiplier());
            assert!(pair[1].energy_cost() > pair[0].energy_cost());
        }
        assert_eq!(TrainingDifficulty::Hard.energy_cost(), 15);
    }
}
