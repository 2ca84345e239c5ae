//! Adaptive AI: intelligence tiers, the action policy and its narration.
//!
//! The policy returns a structured [`Decision`]; narration is a separate
//! projection so callers can log, localise or drop it.

pub mod narration;
pub mod policy;
pub mod tier;

pub use narration::{action_line, execution_adverb, style_line};
pub use policy::{
    CombatAction, Decision, StyleAdjustment, StyleReason, decide, style_adjustment,
};
pub use tier::{BEHAVIOR_TIERS, BehaviorTier, TierName};
