//! Deterministic battle rules for the holobot arena.
//!
//! `arena-core` owns everything that decides a fight: combatant archetypes and
//! stat boosts, the meter and combo systems, damage resolution, the
//! intelligence-driven AI, the turn orchestrator and post-battle progression.
//! It performs no I/O. Randomness is injected through [`env::RngOracle`], so a
//! scripted or seeded source replays a battle exactly.
//!
//! Persistence, energy and event fan-out live in `arena-runtime`; content
//! files are parsed by `arena-content`.
pub mod ai;
pub mod battle;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod meter;
pub mod progression;
pub mod stats;

pub use ai::{BehaviorTier, CombatAction, Decision, StyleAdjustment, StyleReason, TierName, decide};
pub use battle::{
    Battle, BattleEntrant, BattleLogEntry, BattleOutcome, BattlePhase, Combatant, CombatantState,
    CommandError, Side, SideOutcome, TurnEvent, TurnSummary,
};
pub use combat::{HackKind, HackOutcome, SpecialMove, SpecialOutcome};
pub use config::ArenaConfig;
pub use env::{PcgRng, RngOracle, SequenceRng};
pub use error::{ArenaError, ErrorSeverity};
pub use meter::{Gauge, GaugeKind, InsufficientGauge, SpecialPower};
pub use progression::{
    BattleHistory, BattleRecord, BattleResult, CombatantId, CombatantRecord, ProgressionUpdate,
    Rank, StatBoostUpdate,
};
pub use stats::{
    ArchetypeRoster, BattleStats, CombatStyle, CombatantArchetype, CombatantError, Intelligence,
    StatBoosts, StatKind, StatPointError,
};
