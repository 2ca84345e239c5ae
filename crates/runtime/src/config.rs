//! Runtime-level configuration.

use arena_core::ArenaConfig;
use chrono::Duration;

use crate::energy::DailyEnergy;

/// Knobs for [`ArenaService`](crate::ArenaService).
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub arena: ArenaConfig,
    /// Capacity of each event bus topic.
    pub event_buffer_size: usize,
    pub max_energy: u32,
    pub energy_refill_period: Duration,
    /// Safety valve for runaway battles.
    pub turn_limit: u32,
}

impl RuntimeConfig {
    pub const DEFAULT_TURN_LIMIT: u32 = 1_000;

    pub fn with_arena(mut self, arena: ArenaConfig) -> Self {
        self.arena = arena;
        self
    }

    pub fn with_turn_limit(mut self, turn_limit: u32) -> Self {
        self.turn_limit = turn_limit;
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            event_buffer_size: 100,
            max_energy: DailyEnergy::DEFAULT_MAX,
            energy_refill_period: Duration::hours(24),
            turn_limit: Self::DEFAULT_TURN_LIMIT,
        }
    }
}
