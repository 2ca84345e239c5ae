//! Repository layer for dynamic runtime data.
//!
//! Repositories handle data that CHANGES as combatants fight: levels,
//! experience, boosts and history. Archetype templates are static content
//! and come from the roster, not from a repository.

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryCombatantRepo;
pub use traits::CombatantRepository;
