//! Experience curve, level-up rule and battle rewards.

use crate::config::ArenaConfig;

/// Total experience at which `level` begins.
///
/// # Formula
///
/// ```text
/// xp_for(L) = 100 × L²
/// ```
pub fn xp_for_level(level: u32) -> u64 {
    let level = u64::from(level);
    100 * level * level
}

/// Cumulative sum of the per-level floors from level 1 through `level`.
///
/// # Formula
///
/// ```text
/// total(L) = Σ_{l=1..L} xp_for(l)
/// ```
pub fn total_xp_for_level(level: u32) -> u64 {
    (1..=level).map(xp_for_level).sum()
}

/// Position of a combatant's experience within its current level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperienceProgress {
    /// Experience earned past the current level's floor (never negative).
    pub current_xp: u64,
    /// Span between the current and next level floors.
    pub required_xp: u64,
    /// `current_xp / required_xp` as a percentage in `[0, 100]`.
    pub progress: f64,
    pub level: u32,
}

/// Computes progress toward the next level.
///
/// # Formula
///
/// ```text
/// current  = max(0, total_xp - xp_for(level))
/// required = xp_for(level + 1) - xp_for(level)
/// progress = clamp(current / required × 100, 0, 100)
/// ```
pub fn experience_progress(total_xp: u64, level: u32) -> ExperienceProgress {
    let floor = xp_for_level(level);
    let current_xp = total_xp.saturating_sub(floor);
    let required_xp = xp_for_level(level + 1) - floor;
    let progress = if required_xp == 0 {
        100.0
    } else {
        (current_xp as f64 / required_xp as f64 * 100.0).clamp(0.0, 100.0)
    };

    ExperienceProgress {
        current_xp,
        required_xp,
        progress,
        level,
    }
}

/// Level after checking `total_xp` against the next floor.
///
/// Advances at most one level per call and never past the level cap.
pub fn next_level(total_xp: u64, level: u32) -> u32 {
    if level < ArenaConfig::MAX_LEVEL && total_xp >= xp_for_level(level + 1) {
        level + 1
    } else {
        level
    }
}

/// Experience granted for a finished battle.
///
/// # Formula
///
/// ```text
/// level_factor = max(0.5, 1 + 0.1 × (opponent_level - player_level))
/// reward       = floor(50 × level_factor × (won ? 1 : 0.25))
/// reward       = max(reward, 10)
/// ```
pub fn battle_xp_reward(player_level: u32, opponent_level: u32, won: bool) -> u64 {
    const BASE: f64 = 50.0;
    const MINIMUM: u64 = 10;

    let level_gap = f64::from(opponent_level) - f64::from(player_level);
    let level_factor = (1.0 + 0.1 * level_gap).max(0.5);
    let outcome_factor = if won { 1.0 } else { 0.25 };

    ((BASE * level_factor * outcome_factor).floor() as u64).max(MINIMUM)
}

/// Prestige tier derived from level.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    Rookie,
    Starter,
    Champion,
    Rare,
    Elite,
    Legendary,
}

impl Rank {
    pub fn for_level(level: u32) -> Self {
        match level {
            41.. => Self::Legendary,
            31..=40 => Self::Elite,
            21..=30 => Self::Rare,
            11..=20 => Self::Champion,
            2..=10 => Self::Starter,
            _ => Self::Rookie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_floors_follow_square_curve() {
        assert_eq!(xp_for_level(1), 100);
        assert_eq!(xp_for_level(2), 400);
        assert_eq!(xp_for_level(10), 10_000);
        assert_eq!(total_xp_for_level(3), 100 + 400 + 900);
        assert_eq!(total_xp_for_level(0), 0);
    }

    #[test]
    fn fifty_xp_past_level_one_floor() {
        let progress = experience_progress(xp_for_level(1) + 50, 1);
        assert_eq!(progress.current_xp, 50);
        assert_eq!(progress.required_xp, 300);
        assert!((progress.progress - 16.666).abs() < 0.01);
        assert_eq!(progress.level, 1);
        assert_eq!(next_level(xp_for_level(1) + 50, 1), 1);
    }

    #[test]
    fn progress_is_clamped_at_both_ends() {
        let below = experience_progress(0, 5);
        assert_eq!(below.current_xp, 0);
        assert_eq!(below.progress, 0.0);

        let above = experience_progress(1_000_000, 2);
        assert_eq!(above.progress, 100.0);
    }

    #[test]
    fn level_up_is_single_step_and_capped() {
        assert_eq!(next_level(400, 1), 2);
        // Enough for level 4, but only one step per call.
        assert_eq!(next_level(1_600, 1), 2);
        assert_eq!(next_level(u64::MAX / 2, 50), 50);
        assert_eq!(next_level(399, 1), 1);
    }

    #[test]
    fn battle_rewards() {
        assert_eq!(battle_xp_reward(10, 10, true), 50);
        assert_eq!(battle_xp_reward(10, 10, false), 12);
        assert_eq!(battle_xp_reward(10, 15, true), 75);
        // Level factor bottoms out at 0.5.
        assert_eq!(battle_xp_reward(30, 1, true), 25);
        // Minimum reward applies to heavy losses.
        assert_eq!(battle_xp_reward(30, 1, false), 10);
    }

    #[test]
    fn ranks_by_level() {
        assert_eq!(Rank::for_level(1), Rank::Rookie);
        assert_eq!(Rank::for_level(2), Rank::Starter);
        assert_eq!(Rank::for_level(11), Rank::Champion);
        assert_eq!(Rank::for_level(21), Rank::Rare);
        assert_eq!(Rank::for_level(40), Rank::Elite);
        assert_eq!(Rank::for_level(50), Rank::Legendary);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn progress_stays_in_percent_range(total in 0u64..2_000_000, level in 1u32..=50) {
            let p = experience_progress(total, level);
            prop_assert!((0.0..=100.0).contains(&p.progress));
            prop_assert!(p.required_xp > 0);
        }
    }
}
