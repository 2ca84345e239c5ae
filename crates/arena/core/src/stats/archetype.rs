//! Immutable combatant templates.

/// Fighting posture a combatant adopts during battle.
///
/// The AI may switch styles mid-battle; the archetype only provides the
/// starting style.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CombatStyle {
    Aggressive,
    Defensive,
    #[default]
    Balanced,
    Technical,
    Evasive,
}

/// Intelligence score, always within `[1, 100]`.
///
/// Every constructor clamps, so holding an `Intelligence` is proof the value
/// is in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i64", into = "i64"))]
pub struct Intelligence(u8);

impl Intelligence {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// Clamps `value` into `[1, 100]`.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Applies a signed change, clamping the result.
    pub fn adjusted(self, delta: i64) -> Self {
        Self::new(i64::from(self.0) + delta)
    }
}

impl Default for Intelligence {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<i64> for Intelligence {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Intelligence> for i64 {
    fn from(value: Intelligence) -> Self {
        i64::from(value.0)
    }
}

impl core::fmt::Display for Intelligence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared, read-only description of a combatant species.
///
/// Battles never mutate an archetype; they work on a
/// [`BattleStats`](super::BattleStats) copy instead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantArchetype {
    /// Unique roster key.
    pub name: String,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub intelligence: Intelligence,
    pub combat_style: CombatStyle,
    /// Display name of the signature move; see [`SpecialMove`](crate::combat::SpecialMove).
    pub special_move: String,
    /// Scales how fast intelligence moves after each battle (5 is neutral).
    pub learning_rate: u32,
}

impl CombatantArchetype {
    pub fn new(
        name: impl Into<String>,
        max_health: u32,
        attack: u32,
        defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            name: name.into(),
            max_health,
            attack,
            defense,
            speed,
            intelligence: Intelligence::new(50),
            combat_style: CombatStyle::Balanced,
            special_move: String::new(),
            learning_rate: 5,
        }
    }

    pub fn with_intelligence(mut self, intelligence: i64) -> Self {
        self.intelligence = Intelligence::new(intelligence);
        self
    }

    pub fn with_style(mut self, style: CombatStyle) -> Self {
        self.combat_style = style;
        self
    }

    pub fn with_special_move(mut self, special_move: impl Into<String>) -> Self {
        self.special_move = special_move.into();
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: u32) -> Self {
        self.learning_rate = learning_rate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intelligence_clamps_into_range() {
        assert_eq!(Intelligence::new(0).get(), 1);
        assert_eq!(Intelligence::new(-40).get(), 1);
        assert_eq!(Intelligence::new(250).get(), 100);
        assert_eq!(Intelligence::new(99).adjusted(5).get(), 100);
        assert_eq!(Intelligence::new(3).adjusted(-5).get(), 1);
    }

    #[test]
    fn combat_style_parses_case_insensitively() {
        assert_eq!("Aggressive".parse::<CombatStyle>(), Ok(CombatStyle::Aggressive));
        assert_eq!("evasive".parse::<CombatStyle>(), Ok(CombatStyle::Evasive));
        assert_eq!(CombatStyle::Technical.to_string(), "technical");
    }
}
