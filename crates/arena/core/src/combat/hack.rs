//! Hack boosts paid for with the hack gauge and a gas token.

use crate::stats::BattleStats;

/// Hack boost variant.
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
pub enum HackKind {
    /// +20% attack.
    Attack,
    /// +30% attack, speed and defense.
    Speed,
    /// Restores 40 HP.
    Heal,
}

impl HackKind {
    pub const HEAL_AMOUNT: u32 = 40;

    /// Hack gauge needed, which is also the amount consumed.
    pub const fn gauge_cost(self) -> f64 {
        match self {
            Self::Attack | Self::Speed => 50.0,
            Self::Heal => 75.0,
        }
    }
}

/// What a hack boost changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HackOutcome {
    pub attack_gain: u32,
    pub defense_gain: u32,
    pub speed_gain: u32,
    pub healed: u32,
}

/// Applies `kind` to the working stats and current HP.
///
/// Gauge and token bookkeeping stays with the caller.
pub fn apply_hack(kind: HackKind, stats: &mut BattleStats, hp: &mut u32) -> HackOutcome {
    fn pct(value: u32, pct: f64) -> u32 {
        (f64::from(value) * pct).floor() as u32
    }

    let mut outcome = HackOutcome::default();
    match kind {
        HackKind::Attack => {
            outcome.attack_gain = pct(stats.attack, 0.2);
        }
        HackKind::Speed => {
            outcome.attack_gain = pct(stats.attack, 0.3);
            outcome.speed_gain = pct(stats.speed, 0.3);
            outcome.defense_gain = pct(stats.defense, 0.3);
        }
        HackKind::Heal => {
            let healed = (*hp + HackKind::HEAL_AMOUNT).min(stats.max_health);
            outcome.healed = healed.saturating_sub(*hp);
            *hp = healed;
        }
    }
    stats.attack += outcome.attack_gain;
    stats.speed += outcome.speed_gain;
    stats.defense += outcome.defense_gain;
    outcome
}
