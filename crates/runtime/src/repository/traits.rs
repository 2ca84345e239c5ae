//! Repository contracts for saving and loading combatant records.

use arena_core::{CombatantId, CombatantRecord};

use super::Result;

/// Persistence for combatant records.
///
/// This is for DYNAMIC data that changes after every battle:
/// - Level, experience and stat boosts
/// - Learned intelligence
/// - Win/loss tallies and recent battle history
///
/// Archetype templates are static content and live in the roster instead.
pub trait CombatantRepository: Send + Sync {
    /// Load a record by id; `None` when it does not exist.
    fn load(&self, id: &CombatantId) -> Result<Option<CombatantRecord>>;

    /// Insert or replace a record.
    fn save(&self, record: &CombatantRecord) -> Result<()>;

    /// Check if a record exists
    fn exists(&self, id: &CombatantId) -> bool {
        matches!(self.load(id), Ok(Some(_)))
    }

    /// Delete a record. Deleting a missing record is not an error.
    fn delete(&self, id: &CombatantId) -> Result<()>;

    /// List all stored ids in ascending order.
    fn list_ids(&self) -> Result<Vec<CombatantId>> {
        Ok(vec![])
    }
}
