//! Bounded random draws used to randomize ring parameters.
//!
//! The generator is an owned value passed to whoever needs it, so a fixed seed reproduces an
//! animation exactly.

use rand::{Rng as _, SeedableRng as _, rngs::StdRng};

/// Seedable random source for ring field generation.
#[derive(Clone, Debug)]
pub struct RingRng {
    inner: StdRng,
}

impl RingRng {
    /// Deterministic generator for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    /// Uniform float in `[low, high)`; returns `low` when the bounds are equal.
    ///
    /// # Panics
    ///
    /// Panics if `low > high` or either bound is not finite.
    pub fn uniform_float(&mut self, low: f64, high: f64) -> f64 {
        assert!(
            low.is_finite() && high.is_finite() && low <= high,
            "uniform_float requires finite low <= high (got {low}..{high})"
        );
        let u: f64 = self.inner.random();
        low + u * (high - low)
    }

    /// Coarse integer draw: `low + k * (high - low)` with `k` in `[0, max(high - low, 1))`.
    ///
    /// This is not a full-range draw. For `low = 0, high = 2` the result is `0` or `2`, never
    /// `1`; wider ranges yield multiples of the span. The arithmetic wraps in two's complement,
    /// so wide spans never overflow; a span that does not fit in `i64` draws `k = 0`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        assert!(
            low <= high,
            "uniform_int requires low <= high (got {low}..{high})"
        );
        let span = high.wrapping_sub(low);
        let k = self.inner.random_range(0..span.max(1));
        low.wrapping_add(k.wrapping_mul(span))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
