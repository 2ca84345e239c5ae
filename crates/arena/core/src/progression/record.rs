//! Persisted combatant record and the progression effects applied to it.

use super::experience::{ExperienceProgress, Rank, experience_progress, next_level, xp_for_level};
use super::history::{BattleHistory, BattleRecord, BattleResult};
use crate::battle::SideOutcome;
use crate::stats::{
    BattleStats, CombatantArchetype, Intelligence, StatBoosts, StatKind, StatPointError,
    available_stat_points,
};

/// Stable identifier of a persisted combatant.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CombatantId(String);

impl CombatantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CombatantId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Change in intelligence after a battle.
///
/// # Formula
///
/// ```text
/// base   = won ? +2 : -1
/// change = (base + 0.5 × effective - 0.3 × ineffective) × learning_rate / 5
/// ```
///
/// Rounded to the nearest integer.
pub fn intelligence_delta(
    won: bool,
    effective_moves: usize,
    ineffective_moves: usize,
    learning_rate: u32,
) -> i64 {
    let base = if won { 2.0 } else { -1.0 };
    let raw = base + 0.5 * effective_moves as f64 - 0.3 * ineffective_moves as f64;
    (raw * f64::from(learning_rate) / 5.0).round() as i64
}

/// Emitted after experience or level changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressionUpdate {
    pub combatant_id: CombatantId,
    pub previous_level: u32,
    pub new_level: u32,
    pub new_experience: u64,
    pub experience_gained: u64,
    pub previous_intelligence: Intelligence,
    pub new_intelligence: Intelligence,
}

impl ProgressionUpdate {
    pub fn leveled_up(&self) -> bool {
        self.new_level > self.previous_level
    }
}

/// Emitted after a stat point is spent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBoostUpdate {
    pub combatant_id: CombatantId,
    pub stat: StatKind,
    /// Raw boost now applied to `stat`.
    pub new_value: u32,
    pub remaining_points: u32,
}

/// A combatant as persisted between battles.
///
/// Holds its own copy of the archetype so learned intelligence never leaks
/// into the shared roster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantRecord {
    pub id: CombatantId,
    pub archetype: CombatantArchetype,
    pub level: u32,
    pub experience: u64,
    pub stat_boosts: StatBoosts,
    pub wins: u32,
    pub losses: u32,
    pub history: BattleHistory,
}

impl CombatantRecord {
    /// Fresh level-1 record sitting at the level-1 experience floor.
    pub fn new(id: impl Into<CombatantId>, archetype: CombatantArchetype) -> Self {
        Self {
            id: id.into(),
            archetype,
            level: 1,
            experience: xp_for_level(1),
            stat_boosts: StatBoosts::default(),
            wins: 0,
            losses: 0,
            history: BattleHistory::new(),
        }
    }

    /// Record at `level` with experience at that level's floor and no boosts.
    ///
    /// Used for generated opponents.
    pub fn at_level(id: impl Into<CombatantId>, archetype: CombatantArchetype, level: u32) -> Self {
        let level = level.clamp(1, crate::config::ArenaConfig::MAX_LEVEL);
        Self {
            level,
            experience: xp_for_level(level),
            ..Self::new(id, archetype)
        }
    }

    pub fn available_stat_points(&self) -> u32 {
        available_stat_points(self.level, &self.stat_boosts)
    }

    pub fn rank(&self) -> Rank {
        Rank::for_level(self.level)
    }

    pub fn progress(&self) -> ExperienceProgress {
        experience_progress(self.experience, self.level)
    }

    /// Working stats for the next battle.
    pub fn battle_stats(&self) -> BattleStats {
        BattleStats::from_archetype(&self.archetype, &self.stat_boosts)
    }

    /// Spends one stat point. The record is unchanged on error.
    pub fn allocate_stat_point(&mut self, stat: StatKind) -> Result<StatBoostUpdate, StatPointError> {
        let available = self.available_stat_points();
        let new_value = self.stat_boosts.allocate(stat, available)?;
        Ok(StatBoostUpdate {
            combatant_id: self.id.clone(),
            stat,
            new_value,
            remaining_points: self.available_stat_points(),
        })
    }

    /// Adds experience and re-evaluates the level (one step at most).
    pub fn grant_experience(&mut self, xp: u64) -> ProgressionUpdate {
        let previous_level = self.level;
        self.experience = self.experience.saturating_add(xp);
        self.level = next_level(self.experience, self.level);
        ProgressionUpdate {
            combatant_id: self.id.clone(),
            previous_level,
            new_level: self.level,
            new_experience: self.experience,
            experience_gained: xp,
            previous_intelligence: self.archetype.intelligence,
            new_intelligence: self.archetype.intelligence,
        }
    }

    /// Folds a finished battle into the record: experience, level,
    /// intelligence learning, win/loss tally and history.
    pub fn apply_battle_result(
        &mut self,
        outcome: &SideOutcome,
        opponent_id: &CombatantId,
        timestamp: i64,
    ) -> ProgressionUpdate {
        let mut update = self.grant_experience(outcome.xp_awarded);

        let delta = intelligence_delta(
            outcome.won,
            outcome.effective_moves.len(),
            outcome.ineffective_moves.len(),
            self.archetype.learning_rate,
        );
        self.archetype.intelligence = self.archetype.intelligence.adjusted(delta);
        update.new_intelligence = self.archetype.intelligence;

        if outcome.won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }

        self.history.push(BattleRecord {
            opponent_id: opponent_id.clone(),
            result: BattleResult::from_won(outcome.won),
            effective_moves: outcome.effective_moves.clone(),
            ineffective_moves: outcome.ineffective_moves.clone(),
            timestamp,
        });

        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ace() -> CombatantArchetype {
        CombatantArchetype::new("ace", 150, 8, 6, 7)
            .with_intelligence(50)
            .with_learning_rate(5)
    }

    fn outcome(won: bool, xp: u64, effective: usize, ineffective: usize) -> SideOutcome {
        SideOutcome {
            id: CombatantId::new("ace-1"),
            won,
            xp_awarded: xp,
            damage_dealt: 0,
            effective_moves: vec!["attack".into(); effective],
            ineffective_moves: vec!["attack".into(); ineffective],
        }
    }

    #[test]
    fn new_record_starts_at_level_one_floor() {
        let record = CombatantRecord::new("ace-1", ace());
        assert_eq!(record.level, 1);
        assert_eq!(record.experience, 100);
        assert_eq!(record.available_stat_points(), 0);
        assert_eq!(record.rank(), Rank::Rookie);
    }

    #[test]
    fn granting_fifty_xp_keeps_level_one() {
        let mut record = CombatantRecord::new("ace-1", ace());
        let update = record.grant_experience(50);
        assert!(!update.leveled_up());
        let progress = record.progress();
        assert_eq!(progress.current_xp, 50);
        assert_eq!(progress.required_xp, 300);
        assert!((progress.progress - 16.67).abs() < 0.01);
    }

    #[test]
    fn crossing_floor_levels_up_once() {
        let mut record = CombatantRecord::new("ace-1", ace());
        let update = record.grant_experience(2_000);
        assert_eq!(update.previous_level, 1);
        assert_eq!(update.new_level, 2);
        assert_eq!(update.new_experience, 2_100);
        assert_eq!(record.available_stat_points(), 1);
    }

    #[test]
    fn stat_allocation_spends_level_points() {
        let mut record = CombatantRecord::at_level("ace-1", ace(), 3);
        let first = record.allocate_stat_point(StatKind::MaxHealth).unwrap();
        assert_eq!(first.new_value, 10);
        assert_eq!(first.remaining_points, 1);
        record.allocate_stat_point(StatKind::Attack).unwrap();
        assert_eq!(
            record.allocate_stat_point(StatKind::Speed),
            Err(StatPointError::NoPointsAvailable)
        );
        assert_eq!(record.battle_stats().max_health, 160);
        assert_eq!(record.battle_stats().attack, 9);
    }

    #[test]
    fn intelligence_learning_formula() {
        // (2 + 0.5×3 - 0.3×1) × 5/5 = 3.2 → 3
        assert_eq!(intelligence_delta(true, 3, 1, 5), 3);
        // (-1 + 0 - 0.3×2) × 8/5 = -2.56 → -3
        assert_eq!(intelligence_delta(false, 0, 2, 8), -3);
        // (2) × 2/5 = 0.8 → 1
        assert_eq!(intelligence_delta(true, 0, 0, 2), 1);
    }

    #[test]
    fn battle_result_updates_everything() {
        let mut record = CombatantRecord::new("ace-1", ace());
        let opponent = CombatantId::new("kuma-1");
        let update = record.apply_battle_result(&outcome(true, 350, 4, 0), &opponent, 1_700_000_000);

        assert_eq!(update.new_level, 2);
        assert_eq!(update.new_experience, 450);
        assert_eq!(update.previous_intelligence.get(), 50);
        assert_eq!(update.new_intelligence.get(), 54);
        assert_eq!(record.wins, 1);
        assert_eq!(record.history.len(), 1);
        let latest = record.history.latest().unwrap();
        assert_eq!(latest.opponent_id, opponent);
        assert_eq!(latest.result, BattleResult::Win);
    }

    #[test]
    fn intelligence_stays_clamped_after_battles() {
        let archetype = ace().with_intelligence(2).with_learning_rate(10);
        let mut record = CombatantRecord::new("ace-1", archetype);
        let opponent = CombatantId::new("x");
        for _ in 0..5 {
            record.apply_battle_result(&outcome(false, 10, 0, 20), &opponent, 0);
        }
        assert_eq!(record.archetype.intelligence.get(), 1);
        assert_eq!(record.losses, 5);
    }
}
