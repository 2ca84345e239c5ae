//! Per-battle working copy of a combatant's stats.

use super::{CombatStyle, CombatantArchetype, Intelligence, StatBoosts};

/// Effective stats for one battle: archetype values plus permanent boosts.
///
/// Special moves and hack boosts buff this copy; the archetype it was built
/// from stays untouched, and the copy is dropped with the battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleStats {
    pub name: String,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub intelligence: Intelligence,
    pub combat_style: CombatStyle,
    pub special_move: String,
}

impl BattleStats {
    /// Builds the working copy for `archetype` with `boosts` applied.
    pub fn from_archetype(archetype: &CombatantArchetype, boosts: &StatBoosts) -> Self {
        Self {
            name: archetype.name.clone(),
            max_health: archetype.max_health + boosts.max_health,
            attack: archetype.attack + boosts.attack,
            defense: archetype.defense + boosts.defense,
            speed: archetype.speed + boosts.speed,
            intelligence: archetype.intelligence,
            combat_style: archetype.combat_style,
            special_move: archetype.special_move.clone(),
        }
    }

    /// Working copy without boosts.
    pub fn base(archetype: &CombatantArchetype) -> Self {
        Self::from_archetype(archetype, &StatBoosts::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boosts_stack_on_archetype_without_mutating_it() {
        let archetype = CombatantArchetype::new("ace", 150, 8, 6, 7).with_intelligence(50);
        let boosts = StatBoosts {
            attack: 3,
            defense: 1,
            speed: 2,
            max_health: 20,
        };

        let mut stats = BattleStats::from_archetype(&archetype, &boosts);
        assert_eq!(stats.max_health, 170);
        assert_eq!(stats.attack, 11);
        assert_eq!(stats.defense, 7);
        assert_eq!(stats.speed, 9);

        stats.attack += 10;
        assert_eq!(archetype.attack, 8);
    }
}
