//! Data-driven arena content and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Combatant archetype roster (RON)
//! - Arena tuning such as gas tokens and hype limits (TOML)
//!
//! The default roster ships embedded in the crate, so the runtime can start
//! without any files on disk. All loaders deserialize `arena-core` types
//! directly.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, RosterFile, RosterLoader};
