//! Lookup table of archetypes keyed by name.

use std::collections::BTreeMap;

use super::CombatantArchetype;
use crate::error::{ArenaError, ErrorSeverity};

/// Unknown archetype or combatant id.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatantError {
    #[error("invalid combatant: {id}")]
    InvalidCombatant { id: String },

    #[error("duplicate archetype name: {name}")]
    DuplicateArchetype { name: String },
}

impl CombatantError {
    pub fn invalid(id: impl Into<String>) -> Self {
        Self::InvalidCombatant { id: id.into() }
    }
}

impl ArenaError for CombatantError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidCombatant { .. } => ErrorSeverity::Fatal,
            Self::DuplicateArchetype { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCombatant { .. } => "invalid_combatant",
            Self::DuplicateArchetype { .. } => "duplicate_archetype",
        }
    }
}

/// Read-only archetype registry.
///
/// Names are matched case-insensitively and stored lowercased.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArchetypeRoster {
    archetypes: BTreeMap<String, CombatantArchetype>,
}

impl ArchetypeRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster, rejecting duplicate names.
    pub fn from_archetypes(
        archetypes: impl IntoIterator<Item = CombatantArchetype>,
    ) -> Result<Self, CombatantError> {
        let mut roster = Self::new();
        for archetype in archetypes {
            roster.insert(archetype)?;
        }
        Ok(roster)
    }

    pub fn insert(&mut self, archetype: CombatantArchetype) -> Result<(), CombatantError> {
        let key = archetype.name.to_ascii_lowercase();
        if self.archetypes.contains_key(&key) {
            return Err(CombatantError::DuplicateArchetype {
                name: archetype.name,
            });
        }
        self.archetypes.insert(key, archetype);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&CombatantArchetype, CombatantError> {
        self.archetypes
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| CombatantError::invalid(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.archetypes.contains_key(&name.to_ascii_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombatantArchetype> {
        self.archetypes.values()
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}
