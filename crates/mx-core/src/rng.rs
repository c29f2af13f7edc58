//! The simulation's single deterministic random stream.
//!
//! # Determinism strategy
//!
//! Every probabilistic decision in a run (schedule absenteeism, sick-leave
//! draws, contact attempts, link selection, condition ordering) is drawn from
//! one `SimRng`, threaded explicitly as `&mut SimRng` into the operation that
//! needs it.  There is no ambient global generator.
//!
//! The generator is ChaCha8 seeded via `seed_from_u64`.  Unlike `SmallRng`,
//! its output is specified and platform independent, so a fixed seed yields
//! the same draw sequence on every machine and every build.
//!
//! A run may be re-seeded once (see [`SimConfig::reseed_day`][crate::SimConfig]);
//! the draws before and after that point form two independent reproducible
//! segments.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded random source shared by the whole simulation.
///
/// `Clone` copies the full generator state, which lets tests replay the exact
/// stream an operation consumed.
#[derive(Clone, Debug)]
pub struct SimRng(ChaCha8Rng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Discard the current state and restart the stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.0 = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Expose the inner generator for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut ChaCha8Rng {
        &mut self.0
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn draw_random(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Uniform integer in the inclusive range `[low, high]`.
    ///
    /// # Panics
    /// Panics if `low > high`.  Callers guard degenerate ranges (e.g. a
    /// network with zero links) before drawing.
    #[inline]
    pub fn draw_random_int(&mut self, low: u64, high: u64) -> u64 {
        self.0.gen_range(low..=high)
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Round `x` down, then add one with probability equal to the fractional
    /// part.  Negative inputs yield 0 without drawing.
    pub fn stochastic_round(&mut self, x: f64) -> u64 {
        if x <= 0.0 {
            return 0;
        }
        let whole = x.floor();
        let frac = x - whole;
        let mut n = whole as u64;
        if frac > 0.0 && self.draw_random() < frac {
            n += 1;
        }
        n
    }
}
