//! Single attack exchange resolution.

use super::damage::{GUARDED_COMBO_MULTIPLIER, base_damage, evasion_chance, mode_multiplier};
use crate::env::RngOracle;
use crate::meter::combo_multiplier;
use crate::stats::BattleStats;

/// Defensive stances in effect for one exchange.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExchangeModes {
    /// The acting side is in defense mode (its own damage is reduced).
    pub attacker_defending: bool,
    /// The target is in defense mode or guarding (the combo bonus is replaced).
    pub defender_defending: bool,
}

impl ExchangeModes {
    pub fn new(attacker_defending: bool, defender_defending: bool) -> Self {
        Self {
            attacker_defending,
            defender_defending,
        }
    }

    /// Modes seen from the other side, used for counters.
    pub fn swapped(self) -> Self {
        Self {
            attacker_defending: self.defender_defending,
            defender_defending: self.attacker_defending,
        }
    }
}

/// Result of one exchange.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExchangeResult {
    pub damage: u32,
    pub evaded: bool,
    /// Multiplier that was applied; `1.0` when evaded.
    pub combo_multiplier: f64,
}

impl ExchangeResult {
    pub fn evaded() -> Self {
        Self {
            damage: 0,
            evaded: true,
            combo_multiplier: 1.0,
        }
    }

    pub fn landed(&self) -> bool {
        !self.evaded
    }
}

/// Resolves one blow from `attacker` against `defender`.
///
/// # Formula
///
/// ```text
/// base = max(1, 2 × atk - def)
/// if def.speed > atk.speed and roll < (def.speed - atk.speed) / (def.speed + 5):
///     evaded, damage = 0
/// combo = defender_defending ? 0.7 : combo_multiplier(atk.int, combo_hits)
/// mode  = attacker_defending ? 0.6 : 1.0
/// damage = max(1, floor(base × combo × mode))
/// ```
///
/// Draws from `rng` only when the defender is fast enough to evade.
pub fn resolve_exchange<R: RngOracle + ?Sized>(
    attacker: &BattleStats,
    defender: &BattleStats,
    modes: ExchangeModes,
    combo_hits: u32,
    rng: &mut R,
) -> ExchangeResult {
    let base = base_damage(attacker, defender);

    if let Some(chance) = evasion_chance(attacker, defender)
        && rng.chance(chance)
    {
        return ExchangeResult::evaded();
    }

    let combo = if modes.defender_defending {
        GUARDED_COMBO_MULTIPLIER
    } else {
        combo_multiplier(attacker.intelligence, combo_hits)
    };
    let mode = mode_multiplier(modes.attacker_defending);
    let damage = ((f64::from(base) * combo * mode).floor() as u32).max(1);

    ExchangeResult {
        damage,
        evaded: false,
        combo_multiplier: combo,
    }
}

/// Counter-attack by a defender that just evaded.
///
/// Roles and modes are reversed and the combo is always zero, so counters
/// never chain. The counter can itself be evaded.
pub fn resolve_counter<R: RngOracle + ?Sized>(
    evader: &BattleStats,
    original_attacker: &BattleStats,
    original_modes: ExchangeModes,
    rng: &mut R,
) -> ExchangeResult {
    resolve_exchange(evader, original_attacker, original_modes.swapped(), 0, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SequenceRng;
    use crate::stats::CombatantArchetype;

    fn ace() -> BattleStats {
        BattleStats::base(&CombatantArchetype::new("ace", 150, 8, 6, 7).with_intelligence(50))
    }

    fn kuma() -> BattleStats {
        BattleStats::base(&CombatantArchetype::new("kuma", 200, 7, 5, 3).with_intelligence(30))
    }

    #[test]
    fn reference_exchange_deals_thirteen() {
        let mut rng = SequenceRng::constant(0.0);
        let result = resolve_exchange(&ace(), &kuma(), ExchangeModes::default(), 0, &mut rng);
        assert_eq!(result.damage, 13);
        assert!(!result.evaded);
        assert_eq!(result.combo_multiplier, 1.25);
        // Slower defender: no draw taken.
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn guarded_defender_and_defensive_attacker() {
        let mut rng = SequenceRng::constant(0.0);
        let guarded = resolve_exchange(&ace(), &kuma(), ExchangeModes::new(false, true), 4, &mut rng);
        // floor(11 × 0.7) = 7
        assert_eq!(guarded.damage, 7);
        assert_eq!(guarded.combo_multiplier, 0.7);

        let defensive = resolve_exchange(&ace(), &kuma(), ExchangeModes::new(true, false), 0, &mut rng);
        // floor(11 × 1.25 × 0.6) = 8
        assert_eq!(defensive.damage, 8);
    }

    #[test]
    fn faster_defender_evades_on_low_roll() {
        // kuma attacks ace: p = (7 - 3) / 12 = 0.333…
        let mut low = SequenceRng::constant(0.1);
        let evaded = resolve_exchange(&kuma(), &ace(), ExchangeModes::default(), 2, &mut low);
        assert_eq!(evaded, ExchangeResult::evaded());
        assert_eq!(low.consumed(), 1);

        let mut high = SequenceRng::constant(0.9);
        let landed = resolve_exchange(&kuma(), &ace(), ExchangeModes::default(), 0, &mut high);
        assert!(landed.landed());
        // base = 14 - 6 = 8; combo = 1 + 0.15 + 0 = 1.15; floor(9.2) = 9
        assert_eq!(landed.damage, 9);
    }

    #[test]
    fn counter_uses_zero_combo_and_swapped_modes() {
        let mut rng = SequenceRng::constant(0.9);
        let counter = resolve_counter(&ace(), &kuma(), ExchangeModes::new(false, true), &mut rng);
        // ace now attacks in defense mode: floor(11 × 1.25 × 0.6) = 8
        assert_eq!(counter.damage, 8);
    }

    #[test]
    fn heavy_reduction_still_deals_one() {
        let weak = BattleStats::base(&CombatantArchetype::new("w", 10, 1, 1, 1));
        let wall = BattleStats::base(&CombatantArchetype::new("x", 10, 1, 50, 1));
        let mut rng = SequenceRng::constant(0.5);
        let result = resolve_exchange(&weak, &wall, ExchangeModes::new(true, true), 0, &mut rng);
        assert_eq!(result.damage, 1);
    }
}
