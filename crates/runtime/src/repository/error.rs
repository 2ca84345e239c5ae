//! Error types raised by repository implementations.

use arena_core::{ArenaError, ErrorSeverity};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("combatant repository lock was poisoned")]
    LockPoisoned,

    #[error("storage backend error: {0}")]
    Backend(String),
}

impl ArenaError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "repository_lock_poisoned",
            Self::Backend(_) => "repository_backend",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
