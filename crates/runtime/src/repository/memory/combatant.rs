//! In-memory CombatantRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use arena_core::{CombatantId, CombatantRecord};

use crate::repository::{CombatantRepository, RepositoryError, Result};

/// In-memory implementation of CombatantRepository.
///
/// Records are kept in id order, so listings are stable.
pub struct InMemoryCombatantRepo {
    records: RwLock<BTreeMap<CombatantId, CombatantRecord>>,
}

impl InMemoryCombatantRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create a repository pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = CombatantRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryCombatantRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatantRepository for InMemoryCombatantRepo {
    fn load(&self, id: &CombatantId) -> Result<Option<CombatantRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.get(id).cloned())
    }

    fn save(&self, record: &CombatantRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn exists(&self, id: &CombatantId) -> bool {
        self.records
            .read()
            .map(|records| records.contains_key(id))
            .unwrap_or(false)
    }

    fn delete(&self, id: &CombatantId) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.remove(id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<CombatantId>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.keys().cloned().collect())
    }
}
