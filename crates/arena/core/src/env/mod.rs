//! Environment collaborators injected into the pure rules.
//!
//! The battle rules never reach for global state: randomness arrives through
//! [`RngOracle`].
pub mod rng;

pub use rng::{PcgRng, RngOracle, SequenceRng};
