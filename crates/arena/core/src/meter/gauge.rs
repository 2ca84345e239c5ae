//! Special and hack gauges and their fill rates.

use crate::config::ArenaConfig;
use crate::error::{ArenaError, ErrorSeverity};
use crate::stats::Intelligence;

/// Which gauge a rule reads or spends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GaugeKind {
    Special,
    Hack,
}

/// Gauge below the level an action needs.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{gauge} gauge at {available:.0}, needs {required:.0}")]
pub struct InsufficientGauge {
    pub gauge: GaugeKind,
    pub required: f64,
    pub available: f64,
}

impl ArenaError for InsufficientGauge {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "insufficient_gauge"
    }
}

/// Meter in `[0, 100]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gauge(f64);

impl Gauge {
    pub fn empty() -> Self {
        Self(0.0)
    }

    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, ArenaConfig::GAUGE_MAX))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_at_least(self, threshold: f64) -> bool {
        self.0 >= threshold
    }

    /// Adds `amount` (clamped) and returns the new level.
    pub fn fill(&mut self, amount: f64) -> f64 {
        *self = Self::new(self.0 + amount);
        self.0
    }

    /// Spends `amount` if available; otherwise leaves the gauge untouched.
    pub fn spend(&mut self, kind: GaugeKind, amount: f64) -> Result<f64, InsufficientGauge> {
        if self.0 < amount {
            return Err(InsufficientGauge {
                gauge: kind,
                required: amount,
                available: self.0,
            });
        }
        *self = Self::new(self.0 - amount);
        Ok(self.0)
    }

    pub fn reset(&mut self) {
        self.0 = 0.0;
    }
}

/// Defensive action that charges the meters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MeterAction {
    Evade,
    Guard,
    Counter,
}

impl MeterAction {
    pub const fn base_rate(self) -> f64 {
        match self {
            Self::Evade => 0.15,
            Self::Guard => 0.10,
            Self::Counter => 0.20,
        }
    }
}

/// Percentage points gained for performing `action`.
///
/// # Formula
///
/// ```text
/// rate = max(1, intelligence / 50) × base_rate × 100
/// ```
pub fn meter_fill_rate(intelligence: Intelligence, action: MeterAction) -> f64 {
    (intelligence.as_f64() / 50.0).max(1.0) * action.base_rate() * 100.0
}

/// Special gauge gain; doubled in defense mode.
pub fn special_gain(intelligence: Intelligence, action: MeterAction, defense_mode: bool) -> f64 {
    let rate = meter_fill_rate(intelligence, action);
    if defense_mode { rate * 2.0 } else { rate }
}

/// Hack gauge gain; ×2.5 in defense mode.
pub fn hack_gain(intelligence: Intelligence, action: MeterAction, defense_mode: bool) -> f64 {
    let rate = meter_fill_rate(intelligence, action);
    if defense_mode { rate * 2.5 } else { rate }
}

/// Paired gains for both gauges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeterGains {
    pub special: f64,
    pub hack: f64,
}

impl MeterGains {
    /// Gains for a defensive action.
    pub fn for_action(intelligence: Intelligence, action: MeterAction, defense_mode: bool) -> Self {
        Self {
            special: special_gain(intelligence, action, defense_mode),
            hack: hack_gain(intelligence, action, defense_mode),
        }
    }

    /// Gains for landing an attack with `combo` hits already chained.
    ///
    /// # Formula
    ///
    /// ```text
    /// m = min(1 + combo × 0.1, 1.5)
    /// special = 10 × m,  hack = 5 × m
    /// ```
    pub fn on_hit(combo: u32) -> Self {
        let m = (1.0 + f64::from(combo) * 0.1).min(1.5);
        Self {
            special: 10.0 * m,
            hack: 5.0 * m,
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            special: self.special * factor,
            hack: self.hack * factor,
        }
    }
}

/// Strength of a special attack, chosen by how charged the gauge is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SpecialPower {
    Half,
    Full,
}

impl SpecialPower {
    /// Gauge needed to fire at all.
    pub const READY_THRESHOLD: f64 = 50.0;
    /// Gauge needed for full power.
    pub const FULL_THRESHOLD: f64 = 100.0;

    pub fn from_gauge(gauge: Gauge) -> Option<Self> {
        if gauge.is_at_least(Self::FULL_THRESHOLD) {
            Some(Self::Full)
        } else if gauge.is_at_least(Self::READY_THRESHOLD) {
            Some(Self::Half)
        } else {
            None
        }
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Half => 0.5,
            Self::Full => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rate_scales_above_fifty_intelligence() {
        assert_eq!(meter_fill_rate(Intelligence::new(20), MeterAction::Evade), 15.0);
        assert_eq!(meter_fill_rate(Intelligence::new(50), MeterAction::Guard), 10.0);
        assert_eq!(meter_fill_rate(Intelligence::new(100), MeterAction::Counter), 40.0);
    }

    #[test]
    fn defense_mode_multipliers() {
        let int = Intelligence::new(50);
        assert_eq!(special_gain(int, MeterAction::Evade, true), 30.0);
        assert_eq!(hack_gain(int, MeterAction::Evade, true), 37.5);
        assert_eq!(special_gain(int, MeterAction::Evade, false), 15.0);
    }

    #[test]
    fn gauge_clamps_and_spends() {
        let mut gauge = Gauge::empty();
        assert_eq!(gauge.fill(130.0), 100.0);
        assert_eq!(gauge.spend(GaugeKind::Hack, 75.0), Ok(25.0));
        let err = gauge.spend(GaugeKind::Hack, 50.0).unwrap_err();
        assert_eq!(err.gauge, GaugeKind::Hack);
        assert_eq!(err.available, 25.0);
        assert_eq!(gauge.value(), 25.0);
        assert_eq!(gauge.fill(-100.0), 0.0);
    }

    #[test]
    fn special_power_thresholds() {
        assert_eq!(SpecialPower::from_gauge(Gauge::new(49.9)), None);
        assert_eq!(SpecialPower::from_gauge(Gauge::new(50.0)), Some(SpecialPower::Half));
        assert_eq!(SpecialPower::from_gauge(Gauge::new(100.0)), Some(SpecialPower::Full));
    }

    #[test]
    fn hit_gains_cap_at_one_and_a_half() {
        assert_eq!(MeterGains::on_hit(0), MeterGains { special: 10.0, hack: 5.0 });
        assert_eq!(MeterGains::on_hit(9), MeterGains { special: 15.0, hack: 7.5 });
    }
}
