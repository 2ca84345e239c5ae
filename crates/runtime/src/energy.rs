//! Energy gate consulted before training battles.
//!
//! Freeform battles are free; training costs energy that refills to the
//! maximum once per refill period.

use arena_core::{ArenaError, ErrorSeverity};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EnergyError {
    #[error("Insufficient energy. Required: {required}, Available: {available}")]
    InsufficientEnergy { required: u32, available: u32 },
}

impl ArenaError for EnergyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "insufficient_energy"
    }
}

/// Resource gate for energy-costing activities.
///
/// Time is always supplied by the caller; gates never read the clock.
pub trait EnergyGate: Send {
    /// Energy available at `now`.
    fn available(&mut self, now: DateTime<Utc>) -> u32;

    /// Deducts `cost` and returns what remains. Nothing is deducted on error.
    fn try_reserve(&mut self, cost: u32, now: DateTime<Utc>) -> Result<u32, EnergyError>;

    /// Returns energy from a reservation whose activity never concluded.
    fn refund(&mut self, amount: u32);
}

/// Energy pool that refills to its maximum once per period (daily by default).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEnergy {
    max: u32,
    current: u32,
    last_refill: DateTime<Utc>,
    #[serde(with = "period_secs")]
    period: Duration,
}

impl DailyEnergy {
    pub const DEFAULT_MAX: u32 = 100;

    /// Full pool refilled at `now`.
    pub fn new(max: u32, period: Duration, now: DateTime<Utc>) -> Self {
        Self {
            max,
            current: max,
            last_refill: now,
            period,
        }
    }

    /// Full pool with the default maximum and a 24 h period.
    pub fn daily(now: DateTime<Utc>) -> Self {
        Self::new(Self::DEFAULT_MAX, Duration::hours(24), now)
    }

    /// Pool holding `current` energy, clamped to `max`.
    pub fn with_current(mut self, current: u32) -> Self {
        self.current = current.min(self.max);
        self
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn last_refill(&self) -> DateTime<Utc> {
        self.last_refill
    }

    /// Refills when a full period has elapsed since the last refill.
    pub fn refresh_at(&mut self, now: DateTime<Utc>) {
        if now - self.last_refill >= self.period {
            self.current = self.max;
            self.last_refill = now;
        }
    }

}

impl EnergyGate for DailyEnergy {
    fn available(&mut self, now: DateTime<Utc>) -> u32 {
        self.refresh_at(now);
        self.current
    }

    fn try_reserve(&mut self, cost: u32, now: DateTime<Utc>) -> Result<u32, EnergyError> {
        self.refresh_at(now);
        if cost > self.current {
            return Err(EnergyError::InsufficientEnergy {
                required: cost,
                available: self.current,
            });
        }
        self.current -= cost;
        Ok(self.current)
    }

    /// Clamped to `max`, so a refund across a refill never overfills.
    fn refund(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }
}

mod period_secs {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(period: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(period.num_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = i64::deserialize(deserializer)?;
        Ok(Duration::seconds(secs))
    }
}
