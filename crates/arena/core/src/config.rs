/// Arena configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Hack boosts each side may spend per battle.
    pub gas_tokens_per_battle: u8,
    /// Manual hype-ups each side may spend per battle.
    pub hype_uses_per_battle: u8,
    /// Special gauge points granted by one hype-up.
    pub hype_gain: u32,
}

impl ArenaConfig {
    // ===== compile-time constants =====
    /// Gauges (special and hack) are clamped to `[0, GAUGE_MAX]`.
    pub const GAUGE_MAX: f64 = 100.0;
    /// Highest attainable level.
    pub const MAX_LEVEL: u32 = 50;
    /// Global cap on stat points spent across all stats.
    pub const MAX_TOTAL_STAT_POINTS: u32 = 50;
    /// Cap on points spent in a single stat.
    pub const MAX_STAT_POINTS: u32 = 20;
    /// Raw HP granted per stat point spent on max health.
    pub const HP_PER_POINT: u32 = 10;
    /// Battle records kept per combatant.
    pub const MAX_BATTLE_HISTORY: usize = 10;
    /// Below this share of max HP a combatant is considered in danger.
    pub const LOW_HEALTH_RATIO: f64 = 0.3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GAS_TOKENS: u8 = 3;
    pub const DEFAULT_HYPE_USES: u8 = 3;
    pub const DEFAULT_HYPE_GAIN: u32 = 10;

    pub fn new() -> Self {
        Self {
            gas_tokens_per_battle: Self::DEFAULT_GAS_TOKENS,
            hype_uses_per_battle: Self::DEFAULT_HYPE_USES,
            hype_gain: Self::DEFAULT_HYPE_GAIN,
        }
    }

    pub fn with_gas_tokens(mut self, tokens: u8) -> Self {
        self.gas_tokens_per_battle = tokens;
        self
    }

    pub fn with_hype(mut self, uses: u8, gain: u32) -> Self {
        self.hype_uses_per_battle = uses;
        self.hype_gain = gain;
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
