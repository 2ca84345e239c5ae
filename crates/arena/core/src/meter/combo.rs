//! Combo chains and the damage multiplier they feed.

use crate::stats::Intelligence;

/// Longest combo a combatant can sustain.
///
/// `clamp(floor(intelligence / 10), 1, 10)`
pub fn max_combo_hits(intelligence: Intelligence) -> u32 {
    (u32::from(intelligence.get()) / 10).clamp(1, 10)
}

/// Damage multiplier for an attacker with `combo_hits` chained hits.
///
/// # Formula
///
/// ```text
/// effective = min(combo_hits, max_combo_hits)
/// m = 1 + intelligence / 200 + (effective / max_combo_hits) × 0.5
/// ```
///
/// Non-decreasing in `combo_hits`; saturates once the chain reaches the cap.
pub fn combo_multiplier(intelligence: Intelligence, combo_hits: u32) -> f64 {
    let max_hits = max_combo_hits(intelligence);
    let effective = combo_hits.min(max_hits);
    1.0 + intelligence.as_f64() / 200.0 + (f64::from(effective) / f64::from(max_hits)) * 0.5
}

/// Consecutive non-evaded attacks by one combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboCounter {
    hits: u32,
}

impl ComboCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn hits(self) -> u32 {
        self.hits
    }

    /// Counts a landed hit, saturating at `cap`. Returns the new length.
    pub fn register_hit(&mut self, cap: u32) -> u32 {
        self.hits = (self.hits + 1).min(cap);
        self.hits
    }

    /// The chain breaks the moment an attack is evaded.
    pub fn break_chain(&mut self) {
        self.hits = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_hits_by_intelligence() {
        assert_eq!(max_combo_hits(Intelligence::new(1)), 1);
        assert_eq!(max_combo_hits(Intelligence::new(9)), 1);
        assert_eq!(max_combo_hits(Intelligence::new(50)), 5);
        assert_eq!(max_combo_hits(Intelligence::new(100)), 10);
    }

    #[test]
    fn multiplier_at_zero_and_full_combo() {
        let int = Intelligence::new(50);
        assert_eq!(combo_multiplier(int, 0), 1.25);
        assert_eq!(combo_multiplier(int, 5), 1.75);
        assert_eq!(combo_multiplier(int, 50), 1.75);
    }

    #[test]
    fn counter_saturates_and_breaks() {
        let mut combo = ComboCounter::new();
        for _ in 0..7 {
            combo.register_hit(3);
        }
        assert_eq!(combo.hits(), 3);
        combo.break_chain();
        assert_eq!(combo.hits(), 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn multiplier_is_monotone_and_saturates(int in 1i64..=100, hits in 0u32..40) {
            let int = Intelligence::new(int);
            let here = combo_multiplier(int, hits);
            let next = combo_multiplier(int, hits + 1);
            prop_assert!(next >= here);
            if hits >= max_combo_hits(int) {
                prop_assert_eq!(next, here);
            }
        }
    }
}
