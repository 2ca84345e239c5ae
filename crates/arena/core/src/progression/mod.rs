//! Progression: experience curve, levels, stat budget, intelligence learning
//! and the persisted combatant record those rules mutate.

pub mod experience;
pub mod history;
pub mod record;

pub use experience::{
    ExperienceProgress, Rank, battle_xp_reward, experience_progress, next_level,
    total_xp_for_level, xp_for_level,
};
pub use history::{BattleHistory, BattleRecord, BattleResult};
pub use record::{
    CombatantId, CombatantRecord, ProgressionUpdate, StatBoostUpdate, intelligence_delta,
};
