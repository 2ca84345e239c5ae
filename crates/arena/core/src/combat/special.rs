//! Signature special moves.
//!
//! A special attack deals flat damage scaled by the gauge-derived power and
//! buffs the user's working stats for the rest of the battle.

use crate::meter::SpecialPower;
use crate::stats::{BattleStats, StatKind};

/// How a special move raises a stat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Buff {
    /// Fraction of the current stat, e.g. `0.3` for +30%.
    Percent(f64),
    /// Flat amount.
    Flat(u32),
}

/// Known signature moves; anything else falls back to [`SpecialMove::Signature`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialMove {
    #[strum(to_string = "1st Strike")]
    FirstStrike,
    #[strum(to_string = "Sharp Claws")]
    SharpClaws,
    #[strum(to_string = "Shadow Strike")]
    ShadowStrike,
    #[strum(to_string = "Counter Claw")]
    CounterClaw,
    Stalk,
    Torrent,
    /// Generic move used for unrecognised names.
    #[strum(to_string = "Signature Move")]
    Signature,
}

impl SpecialMove {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "1st strike" => Self::FirstStrike,
            "sharp claws" => Self::SharpClaws,
            "shadow strike" => Self::ShadowStrike,
            "counter claw" => Self::CounterClaw,
            "stalk" => Self::Stalk,
            "torrent" => Self::Torrent,
            _ => Self::Signature,
        }
    }

    /// Damage at full power.
    pub const fn base_damage(self) -> u32 {
        match self {
            Self::FirstStrike => 40,
            Self::SharpClaws => 50,
            Self::ShadowStrike => 35,
            Self::CounterClaw => 45,
            Self::Stalk => 32,
            Self::Torrent => 40,
            Self::Signature => 25,
        }
    }

    pub fn buffs(self) -> &'static [(StatKind, Buff)] {
        match self {
            Self::FirstStrike => &[
                (StatKind::Attack, Buff::Percent(0.3)),
                (StatKind::Speed, Buff::Percent(0.3)),
            ],
            Self::SharpClaws => &[(StatKind::Attack, Buff::Percent(0.4))],
            Self::ShadowStrike => &[(StatKind::Speed, Buff::Percent(0.5))],
            Self::CounterClaw => &[(StatKind::Defense, Buff::Percent(0.3))],
            Self::Stalk => &[(StatKind::Speed, Buff::Flat(6))],
            Self::Torrent => &[],
            Self::Signature => &[(StatKind::Attack, Buff::Flat(5))],
        }
    }
}

/// What a special attack did.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialOutcome {
    pub special_move: SpecialMove,
    pub power: SpecialPower,
    pub damage: u32,
    /// Stat increases applied to the user's working copy.
    pub buffs: Vec<(StatKind, u32)>,
}

/// Fires `user`'s special move at `power`, buffing `user` in place.
///
/// # Formula
///
/// ```text
/// damage  = floor(base_damage × power)
/// percent = floor(stat × pct × power)
/// flat    = floor(amount × power)
/// ```
pub fn perform_special(user: &mut BattleStats, power: SpecialPower) -> SpecialOutcome {
    let special_move = SpecialMove::from_name(&user.special_move);
    let scale = power.multiplier();
    let damage = (f64::from(special_move.base_damage()) * scale).floor() as u32;

    let mut buffs = Vec::new();
    for &(stat, buff) in special_move.buffs() {
        let slot = match stat {
            StatKind::Attack => &mut user.attack,
            StatKind::Defense => &mut user.defense,
            StatKind::Speed => &mut user.speed,
            StatKind::MaxHealth => &mut user.max_health,
        };
        let gain = match buff {
            Buff::Percent(pct) => (f64::from(*slot) * pct * scale).floor() as u32,
            Buff::Flat(amount) => (f64::from(amount) * scale).floor() as u32,
        };
        *slot += gain;
        buffs.push((stat, gain));
    }

    SpecialOutcome {
        special_move,
        power,
        damage,
        buffs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::CombatantArchetype;

    fn user(special: &str, attack: u32, speed: u32) -> BattleStats {
        BattleStats::base(
            &CombatantArchetype::new("u", 150, attack, 6, speed).with_special_move(special),
        )
    }

    #[test]
    fn names_resolve_with_fallback() {
        assert_eq!(SpecialMove::from_name("1st Strike"), SpecialMove::FirstStrike);
        assert_eq!(SpecialMove::from_name("sharp claws"), SpecialMove::SharpClaws);
        assert_eq!(SpecialMove::from_name("Heavy Leap"), SpecialMove::Signature);
        assert_eq!(SpecialMove::CounterClaw.to_string(), "Counter Claw");
    }

    #[test]
    fn full_power_first_strike() {
        let mut stats = user("1st Strike", 10, 20);
        let outcome = perform_special(&mut stats, SpecialPower::Full);
        assert_eq!(outcome.damage, 40);
        assert_eq!(stats.attack, 13);
        assert_eq!(stats.speed, 26);
        assert_eq!(outcome.buffs, vec![(StatKind::Attack, 3), (StatKind::Speed, 6)]);
    }

    #[test]
    fn half_power_halves_damage_and_buffs() {
        let mut stats = user("Stalk", 6, 6);
        let outcome = perform_special(&mut stats, SpecialPower::Half);
        assert_eq!(outcome.damage, 16);
        assert_eq!(stats.speed, 9);

        let mut generic = user("Dark Veil", 4, 3);
        let outcome = perform_special(&mut generic, SpecialPower::Half);
        assert_eq!(outcome.special_move, SpecialMove::Signature);
        assert_eq!(outcome.damage, 12);
        assert_eq!(generic.attack, 6);
    }
}
