//! In-memory repository implementations for testing and local runs.

mod combatant;

pub use combatant::InMemoryCombatantRepo;
