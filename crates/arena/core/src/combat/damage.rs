//! Damage and evasion formulas.

use crate::stats::BattleStats;

/// Combo multiplier used instead of the intelligence formula while the
/// defender holds a defensive stance.
pub const GUARDED_COMBO_MULTIPLIER: f64 = 0.7;

/// Damage multiplier for an attacker that is itself in defense mode.
pub const DEFENSIVE_ATTACK_MULTIPLIER: f64 = 0.6;

/// Raw damage before any multiplier.
///
/// # Formula
///
/// ```text
/// base = max(1, 2 × attack - defense)
/// ```
pub fn base_damage(attacker: &BattleStats, defender: &BattleStats) -> u32 {
    (2 * i64::from(attacker.attack) - i64::from(defender.defense)).max(1) as u32
}

/// Chance that `defender` slips `attacker`'s blow.
///
/// Only a strictly faster defender can evade.
///
/// # Formula
///
/// ```text
/// p = (defender.speed - attacker.speed) / (defender.speed + 5)
/// ```
pub fn evasion_chance(attacker: &BattleStats, defender: &BattleStats) -> Option<f64> {
    if defender.speed <= attacker.speed {
        return None;
    }
    let gap = f64::from(defender.speed - attacker.speed);
    Some(gap / (f64::from(defender.speed) + 5.0))
}

/// Mode multiplier for the acting side.
pub fn mode_multiplier(attacker_defending: bool) -> f64 {
    if attacker_defending {
        DEFENSIVE_ATTACK_MULTIPLIER
    } else {
        1.0
    }
}

/// Applies damage to current HP (clamped to 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::CombatantArchetype;

    fn stats(attack: u32, defense: u32, speed: u32) -> BattleStats {
        BattleStats::base(&CombatantArchetype::new("t", 100, attack, defense, speed))
    }

    #[test]
    fn base_damage_has_floor_of_one() {
        assert_eq!(base_damage(&stats(8, 6, 7), &stats(7, 5, 3)), 11);
        assert_eq!(base_damage(&stats(1, 0, 0), &stats(0, 40, 0)), 1);
    }

    #[test]
    fn only_faster_defenders_evade() {
        assert_eq!(evasion_chance(&stats(5, 5, 7), &stats(5, 5, 7)), None);
        assert_eq!(evasion_chance(&stats(5, 5, 7), &stats(5, 5, 3)), None);
        let p = evasion_chance(&stats(5, 5, 3), &stats(5, 5, 7)).unwrap();
        assert!((p - 4.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn hp_never_underflows() {
        assert_eq!(apply_damage(10, 25), 0);
        assert_eq!(apply_damage(30, 12), 18);
    }
}
