//! Serializable summaries of finished battles.

use arena_core::{BattleLogEntry, BattleOutcome, CombatantId, ProgressionUpdate, Side};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::training::TrainingDifficulty;

/// Everything a caller needs to present a finished battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    pub left: CombatantId,
    pub right: CombatantId,
    pub outcome: BattleOutcome,
    pub log: Vec<BattleLogEntry>,
    /// One update per persisted record, left first. Generated training
    /// opponents are not persisted and get no entry.
    pub progression: Vec<ProgressionUpdate>,
    pub concluded_at: DateTime<Utc>,
}

impl BattleReport {
    pub fn winner_id(&self) -> &CombatantId {
        match self.outcome.winner {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn progression_for(&self, id: &CombatantId) -> Option<&ProgressionUpdate> {
        self.progression.iter().find(|update| &update.combatant_id == id)
    }
}

/// A training battle plus its energy bookkeeping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub difficulty: TrainingDifficulty,
    pub energy_spent: u32,
    pub energy_remaining: u32,
    /// Multiplier actually applied to the trainee's experience; 0 on a loss,
    /// which earns nothing.
    pub xp_multiplier: u64,
    pub battle: BattleReport,
}
