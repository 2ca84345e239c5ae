//! Event payloads published by the runtime.

use arena_core::{ProgressionUpdate, StatBoostUpdate};
use serde::{Deserialize, Serialize};

use crate::report::BattleReport;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    /// Experience, level, intelligence and stat-boost changes
    Progression,
    /// Finished battles
    Battle,
}

/// Event wrapper that carries the typed payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArenaEvent {
    /// A combatant's experience changed after a battle.
    Progression(ProgressionUpdate),

    /// A stat point was spent.
    StatBoost(StatBoostUpdate),

    /// A battle reached its conclusion and both records were saved.
    BattleConcluded(Box<BattleReport>),
}

impl ArenaEvent {
    pub fn topic(&self) -> Topic {
        match self {
            ArenaEvent::Progression(_) | ArenaEvent::StatBoost(_) => Topic::Progression,
            ArenaEvent::BattleConcluded(_) => Topic::Battle,
        }
    }
}
