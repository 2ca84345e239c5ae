//! Stat model: immutable archetypes, permanent boosts, and the per-battle
//! working copy built from both.
//!
//! ```text
//! [ CombatantArchetype ] + [ StatBoosts ]
//!            ↓
//!      [ BattleStats ]   (mutated only inside one battle)
//! ```

pub mod archetype;
pub mod boosts;
pub mod roster;
pub mod snapshot;

pub use archetype::{CombatStyle, CombatantArchetype, Intelligence};
pub use boosts::{StatBoosts, StatKind, StatPointError, available_stat_points};
pub use roster::{ArchetypeRoster, CombatantError};
pub use snapshot::BattleStats;
