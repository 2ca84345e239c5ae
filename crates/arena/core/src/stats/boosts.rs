//! Permanent stat-point allocations bought with level-up points.

use crate::config::ArenaConfig;
use crate::error::{ArenaError, ErrorSeverity};

/// Stat that can receive boost points.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Attack,
    Defense,
    Speed,
    #[strum(to_string = "max_health", serialize = "health", serialize = "hp")]
    MaxHealth,
}

impl StatKind {
    /// Raw stat units bought by a single point.
    pub const fn units_per_point(self) -> u32 {
        match self {
            Self::MaxHealth => ArenaConfig::HP_PER_POINT,
            _ => 1,
        }
    }

    /// Cap expressed in raw stat units (200 HP for max health).
    pub const fn cap_in_units(self) -> u32 {
        ArenaConfig::MAX_STAT_POINTS * self.units_per_point()
    }
}

/// Why a stat-point allocation was refused.
///
/// Every variant maps to the `insufficient_stat_points` code; the variant
/// says which budget ran out.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatPointError {
    #[error("no stat points available")]
    NoPointsAvailable,

    #[error("total stat point cap of {cap} reached")]
    TotalCapReached { cap: u32 },

    #[error("{stat} is already at its cap of {cap}")]
    StatCapReached { stat: StatKind, cap: u32 },
}

impl ArenaError for StatPointError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "insufficient_stat_points"
    }
}

/// Accumulated boosts for one combatant.
///
/// `max_health` is stored in raw HP; every other stat in points. Spent points
/// count max health at `HP_PER_POINT` HP per point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatBoosts {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub max_health: u32,
}

impl StatBoosts {
    /// Raw boost currently applied to `stat`.
    pub fn get(&self, stat: StatKind) -> u32 {
        match stat {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::MaxHealth => self.max_health,
        }
    }

    fn slot_mut(&mut self, stat: StatKind) -> &mut u32 {
        match stat {
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::Speed => &mut self.speed,
            StatKind::MaxHealth => &mut self.max_health,
        }
    }

    /// Points spent in `stat`.
    pub fn points_in(&self, stat: StatKind) -> u32 {
        self.get(stat) / stat.units_per_point()
    }

    /// Points spent across all stats.
    pub fn total_used_points(&self) -> u32 {
        self.attack + self.defense + self.speed + self.max_health / ArenaConfig::HP_PER_POINT
    }

    /// Checks whether one more point may go into `stat` given the free budget.
    pub fn can_boost(&self, stat: StatKind, available_points: u32) -> Result<(), StatPointError> {
        if available_points == 0 {
            return Err(StatPointError::NoPointsAvailable);
        }
        if self.total_used_points() >= ArenaConfig::MAX_TOTAL_STAT_POINTS {
            return Err(StatPointError::TotalCapReached {
                cap: ArenaConfig::MAX_TOTAL_STAT_POINTS,
            });
        }
        if self.get(stat) + stat.units_per_point() > stat.cap_in_units() {
            return Err(StatPointError::StatCapReached {
                stat,
                cap: stat.cap_in_units(),
            });
        }
        Ok(())
    }

    /// Spends one point on `stat`; state is untouched on error.
    pub fn allocate(&mut self, stat: StatKind, available_points: u32) -> Result<u32, StatPointError> {
        self.can_boost(stat, available_points)?;
        let slot = self.slot_mut(stat);
        *slot += stat.units_per_point();
        Ok(*slot)
    }
}

/// Free points for a combatant at `level`: one per level beyond 1, minus
/// what is already spent. Never negative.
pub fn available_stat_points(level: u32, boosts: &StatBoosts) -> u32 {
    level
        .saturating_sub(1)
        .saturating_sub(boosts.total_used_points())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_points_cost_ten_hp_each() {
        let boosts = StatBoosts {
            attack: 2,
            defense: 1,
            speed: 0,
            max_health: 30,
        };
        assert_eq!(boosts.total_used_points(), 6);
        assert_eq!(boosts.points_in(StatKind::MaxHealth), 3);
        assert_eq!(available_stat_points(10, &boosts), 3);
        assert_eq!(available_stat_points(3, &boosts), 0);
    }

    #[test]
    fn allocation_without_points_is_rejected() {
        let mut boosts = StatBoosts::default();
        assert_eq!(
            boosts.allocate(StatKind::Attack, 0),
            Err(StatPointError::NoPointsAvailable)
        );
        assert_eq!(boosts, StatBoosts::default());
    }

    #[test]
    fn individual_cap_blocks_twenty_first_point() {
        let mut boosts = StatBoosts {
            speed: 20,
            ..StatBoosts::default()
        };
        let before = boosts;
        let err = boosts.allocate(StatKind::Speed, 5).unwrap_err();
        assert_eq!(
            err,
            StatPointError::StatCapReached {
                stat: StatKind::Speed,
                cap: 20
            }
        );
        assert_eq!(err.error_code(), "insufficient_stat_points");
        assert_eq!(boosts, before);

        let mut hp = StatBoosts {
            max_health: 200,
            ..StatBoosts::default()
        };
        assert!(hp.allocate(StatKind::MaxHealth, 5).is_err());
        assert_eq!(hp.max_health, 200);
    }

    #[test]
    fn total_cap_blocks_fifty_first_point() {
        let mut boosts = StatBoosts {
            attack: 20,
            defense: 20,
            speed: 10,
            max_health: 0,
        };
        assert_eq!(
            boosts.allocate(StatKind::MaxHealth, 10),
            Err(StatPointError::TotalCapReached { cap: 50 })
        );
    }

    #[test]
    fn successful_allocation_returns_new_value() {
        let mut boosts = StatBoosts::default();
        assert_eq!(boosts.allocate(StatKind::MaxHealth, 1), Ok(10));
        assert_eq!(boosts.allocate(StatKind::Attack, 1), Ok(1));
        assert_eq!(boosts.total_used_points(), 2);
    }

    #[test]
    fn stat_kind_parses_aliases() {
        assert_eq!("hp".parse::<StatKind>(), Ok(StatKind::MaxHealth));
        assert_eq!("max_health".parse::<StatKind>(), Ok(StatKind::MaxHealth));
        assert_eq!("Attack".parse::<StatKind>(), Ok(StatKind::Attack));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    fn stat_kind() -> impl Strategy<Value = StatKind> {
        prop::sample::select(StatKind::iter().collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn allocation_never_exceeds_caps(
            level in 1u32..=50,
            picks in prop::collection::vec(stat_kind(), 0..80),
        ) {
            let mut boosts = StatBoosts::default();
            for stat in picks {
                let before = boosts;
                let available = available_stat_points(level, &boosts);
                if boosts.allocate(stat, available).is_err() {
                    prop_assert_eq!(boosts, before);
                }
                prop_assert!(boosts.total_used_points() <= ArenaConfig::MAX_TOTAL_STAT_POINTS);
                for kind in StatKind::iter() {
                    prop_assert!(boosts.get(kind) <= kind.cap_in_units());
                }
                prop_assert!(boosts.total_used_points() <= level - 1);
            }
        }
    }
}
