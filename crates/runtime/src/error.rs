//! Unified error type surfaced by the arena runtime.
//!
//! Wraps failures from the battle rules, repositories and the energy gate so
//! callers can bubble them up with a single `?`.
use arena_core::{
    ArenaError, CombatantError, CombatantId, CommandError, ErrorSeverity, StatPointError,
};
use thiserror::Error;

use crate::energy::EnergyError;
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    InvalidCombatant(#[from] CombatantError),

    #[error("combatant {id} is already registered")]
    DuplicateCombatant { id: CombatantId },

    #[error("combatant {id} cannot fight itself")]
    SelfMatch { id: CombatantId },

    #[error(transparent)]
    Energy(#[from] EnergyError),

    #[error(transparent)]
    StatPoints(#[from] StatPointError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("battle exceeded {limit} turns without a winner")]
    TurnLimitExceeded { limit: u32 },
}

impl RuntimeError {
    pub(crate) fn unknown_combatant(id: &CombatantId) -> Self {
        Self::InvalidCombatant(CombatantError::invalid(id.as_str()))
    }
}

impl ArenaError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Repository(err) => err.severity(),
            Self::InvalidCombatant(err) => err.severity(),
            Self::DuplicateCombatant { .. } | Self::SelfMatch { .. } => ErrorSeverity::Validation,
            Self::Energy(err) => err.severity(),
            Self::StatPoints(err) => err.severity(),
            Self::Command(err) => err.severity(),
            Self::TurnLimitExceeded { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Repository(err) => err.error_code(),
            Self::InvalidCombatant(err) => err.error_code(),
            Self::DuplicateCombatant { .. } => "duplicate_combatant",
            Self::SelfMatch { .. } => "self_match",
            Self::Energy(err) => err.error_code(),
            Self::StatPoints(err) => err.error_code(),
            Self::Command(err) => err.error_code(),
            Self::TurnLimitExceeded { .. } => "turn_limit_exceeded",
        }
    }
}
