//! Adapter from `rand` generators to the battle rules' random source.

use arena_core::RngOracle;
use rand::RngCore;

/// Oracle over the standard `rand` generator.
pub type StdRandOracle = RandOracle<rand::rngs::StdRng>;

/// Wraps any [`rand::RngCore`] as an [`RngOracle`].
#[derive(Clone, Debug)]
pub struct RandOracle<R> {
    inner: R,
}

impl<R: RngCore> RandOracle<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl StdRandOracle {
    /// Seeded standard generator.
    pub fn seeded(seed: u64) -> Self {
        use rand::SeedableRng;
        Self::new(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Standard generator seeded from the OS.
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self::new(rand::rngs::StdRng::from_entropy())
    }
}

impl<R: RngCore> RngOracle for RandOracle<R> {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_streams_repeat() {
        let mut a = StdRandOracle::seeded(9);
        let mut b = StdRandOracle::seeded(9);
        for _ in 0..16 {
            let draw = a.next_unit();
            assert!((0.0..1.0).contains(&draw));
            assert_eq!(draw, b.next_unit());
        }
    }
}
