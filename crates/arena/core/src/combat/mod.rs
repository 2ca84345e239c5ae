//! Combat resolution system.
//!
//! Pure functions for resolving one blow, a counter, a special move or a
//! hack boost. Randomness only enters through the injected
//! [`RngOracle`](crate::env::RngOracle).
//!
//! # Core Functions
//!
//! - `resolve_exchange`: evasion check + damage for one attack
//! - `resolve_counter`: reversed exchange after an evasion
//! - `perform_special`: signature move damage and buffs
//! - `apply_hack`: hack boost effects

pub mod damage;
pub mod exchange;
pub mod hack;
pub mod special;

pub use damage::{
    DEFENSIVE_ATTACK_MULTIPLIER, GUARDED_COMBO_MULTIPLIER, apply_damage, base_damage,
    evasion_chance, mode_multiplier,
};
pub use exchange::{ExchangeModes, ExchangeResult, resolve_counter, resolve_exchange};
pub use hack::{HackKind, HackOutcome, apply_hack};
pub use special::{Buff, SpecialMove, SpecialOutcome, perform_special};
