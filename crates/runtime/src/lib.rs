//! Runtime orchestration for the holobot arena.
//!
//! This crate wires the pure battle rules from `arena-core` to persistence,
//! energy accounting and event fan-out. Consumers embed [`ArenaService`] to
//! register combatants, run freeform and training battles, and spend stat
//! points, then subscribe to the [`EventBus`] for progression updates.
//!
//! Modules are organized by responsibility:
//! - [`service`] sequences battles end to end
//! - [`repository`] persists combatant records
//! - [`events`] provides the topic-based event bus
//! - [`energy`] and [`training`] gate and tune training battles
//! - [`rng`] adapts `rand` generators to the rules' random source
pub mod config;
pub mod energy;
pub mod error;
pub mod events;
pub mod report;
pub mod repository;
pub mod rng;
pub mod service;
pub mod training;

pub use config::RuntimeConfig;
pub use energy::{DailyEnergy, EnergyError, EnergyGate};
pub use error::{Result, RuntimeError};
pub use events::{ArenaEvent, EventBus, Topic};
pub use report::{BattleReport, TrainingReport};
pub use repository::{CombatantRepository, InMemoryCombatantRepo, RepositoryError};
pub use rng::{RandOracle, StdRandOracle};
pub use service::ArenaService;
pub use training::TrainingDifficulty;
