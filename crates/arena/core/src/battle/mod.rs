//! Battle orchestration.
//!
//! [`Battle`] seats two combatants, alternates their turns (left first) and
//! concludes as soon as one side's HP reaches zero. Side commands (defense
//! mode, hype, hacks, manual specials) are validated against the current
//! phase and leave the battle untouched when rejected.

pub mod engine;
pub mod outcome;
pub mod state;

pub use engine::{Battle, BattleLogEntry, BattlePhase, CommandError, TurnEvent, TurnSummary};
pub use outcome::{BattleOutcome, SideOutcome};
pub use state::{BattleEntrant, BattleTally, Combatant, CombatantState, Side};
