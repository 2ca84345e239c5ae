//! Meter system: gauge accumulation, fill rates and combo scaling.
//!
//! All functions are pure; the battle engine owns the gauges and counters
//! and decides when each rule fires.

pub mod combo;
pub mod gauge;

pub use combo::{ComboCounter, combo_multiplier, max_combo_hits};
pub use gauge::{
    Gauge, GaugeKind, InsufficientGauge, MeterAction, MeterGains, SpecialPower, hack_gain,
    meter_fill_rate, special_gain,
};
