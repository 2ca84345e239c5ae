//! Per-battle mutable state.

use crate::config::ArenaConfig;
use crate::meter::{ComboCounter, Gauge};
use crate::progression::{CombatantId, CombatantRecord};
use crate::stats::{BattleStats, CombatStyle};

/// Which half of the arena a combatant occupies. Left always opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// Mutable fighting state of one combatant, discarded with the battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantState {
    pub hp: u32,
    pub special: Gauge,
    pub hack: Gauge,
    pub combo: ComboCounter,
    pub last_move_effective: bool,
    /// Set after this combatant's attack was evaded; invites a counter.
    pub enemy_vulnerable: bool,
    /// Set when a landed hit pushed the combo to its cap.
    pub enemy_staggered: bool,
    pub current_style: CombatStyle,
    /// Player-controlled stance.
    pub defense_mode: bool,
    /// Raised by the AI's evade action until this combatant acts again.
    pub guarding: bool,
    pub gas_tokens: u8,
    pub hype_uses: u8,
}

impl CombatantState {
    /// Full HP, empty gauges, no combo.
    pub fn fresh(stats: &BattleStats, config: &ArenaConfig) -> Self {
        Self {
            hp: stats.max_health,
            special: Gauge::empty(),
            hack: Gauge::empty(),
            combo: ComboCounter::new(),
            last_move_effective: true,
            enemy_vulnerable: false,
            enemy_staggered: false,
            current_style: stats.combat_style,
            defense_mode: false,
            guarding: false,
            gas_tokens: config.gas_tokens_per_battle,
            hype_uses: 0,
        }
    }

    /// HP below 30% of `max_health`.
    pub fn is_low_health(&self, max_health: u32) -> bool {
        f64::from(self.hp) < f64::from(max_health) * ArenaConfig::LOW_HEALTH_RATIO
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Defense mode or an AI guard, either of which softens incoming blows.
    pub fn is_defending(&self) -> bool {
        self.defense_mode || self.guarding
    }
}

/// Damage and move bookkeeping that feeds the post-battle rewards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleTally {
    pub damage_dealt: u32,
    /// Two experience per point of damage dealt.
    pub damage_xp: u64,
    pub effective_moves: Vec<String>,
    pub ineffective_moves: Vec<String>,
}

impl BattleTally {
    pub fn record_hit(&mut self, move_name: &str, damage: u32) {
        self.damage_dealt += damage;
        self.damage_xp += u64::from(damage) * 2;
        self.effective_moves.push(move_name.to_owned());
    }

    pub fn record_miss(&mut self, move_name: &str) {
        self.ineffective_moves.push(move_name.to_owned());
    }
}

/// What the engine needs to seat a combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleEntrant {
    pub id: CombatantId,
    pub level: u32,
    pub stats: BattleStats,
}

impl From<&CombatantRecord> for BattleEntrant {
    fn from(record: &CombatantRecord) -> Self {
        Self {
            id: record.id.clone(),
            level: record.level,
            stats: record.battle_stats(),
        }
    }
}

/// A seated combatant: its identity, working stats and battle state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    pub level: u32,
    /// Stats as they entered the arena; `start` restores from these.
    pub base_stats: BattleStats,
    pub stats: BattleStats,
    pub state: CombatantState,
    pub tally: BattleTally,
}

impl Combatant {
    pub fn new(entrant: BattleEntrant, config: &ArenaConfig) -> Self {
        let state = CombatantState::fresh(&entrant.stats, config);
        Self {
            id: entrant.id,
            level: entrant.level,
            base_stats: entrant.stats.clone(),
            stats: entrant.stats,
            state,
            tally: BattleTally::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.stats.name
    }

    pub(crate) fn reset(&mut self, config: &ArenaConfig) {
        self.stats = self.base_stats.clone();
        self.state = CombatantState::fresh(&self.stats, config);
        self.tally = BattleTally::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::CombatantArchetype;

    #[test]
    fn fresh_state_is_full_and_empty() {
        let stats = BattleStats::base(
            &CombatantArchetype::new("tora", 180, 5, 4, 6).with_style(CombatStyle::Technical),
        );
        let state = CombatantState::fresh(&stats, &ArenaConfig::default());
        assert_eq!(state.hp, 180);
        assert_eq!(state.special.value(), 0.0);
        assert_eq!(state.combo.hits(), 0);
        assert_eq!(state.current_style, CombatStyle::Technical);
        assert_eq!(state.gas_tokens, 3);
        assert!(!state.is_defending());
    }

    #[test]
    fn low_health_uses_share_of_max() {
        let stats = BattleStats::base(&CombatantArchetype::new("k", 200, 7, 5, 3));
        let mut state = CombatantState::fresh(&stats, &ArenaConfig::default());
        state.hp = 60;
        assert!(!state.is_low_health(200));
        state.hp = 59;
        assert!(state.is_low_health(200));
    }

    #[test]
    fn tally_doubles_damage_into_xp() {
        let mut tally = BattleTally::default();
        tally.record_hit("attack", 13);
        tally.record_miss("attack");
        assert_eq!(tally.damage_xp, 26);
        assert_eq!(tally.effective_moves.len(), 1);
        assert_eq!(tally.ineffective_moves.len(), 1);
    }
}
