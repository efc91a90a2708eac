//! Pseudo-random number generator wrapper for Monte Carlo simulations.
//!
//! This module provides [`PricerRng`], a seeded PRNG wrapper that offers
//! reproducible random number generation with efficient batch operations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Monte Carlo simulation random number generator.
///
/// Provides seeded, reproducible random number generation with efficient
/// batch operations for standard normal variates.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
///
/// // Single value generation
/// let n: f64 = rng.gen_normal();
///
/// // Batch generation (zero allocation)
/// let mut buffer = vec![0.0; 100];
/// rng.fill_normal(&mut buffer);
/// ```
#[derive(Clone, Debug)]
pub struct PricerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl PricerRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of random numbers,
    /// enabling reproducible Monte Carlo simulations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let mut rng1 = PricerRng::from_seed(12345);
    /// let mut rng2 = PricerRng::from_seed(12345);
    ///
    /// // Same seed produces identical sequences
    /// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a new RNG seeded from system entropy.
    ///
    /// The drawn seed is kept, so `PricerRng::from_seed(rng.seed())` replays
    /// the same sequence.
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::thread_rng().gen();
        Self::from_seed(seed)
    }

    /// Returns the seed used for initialisation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let rng = PricerRng::from_seed(42);
    /// assert_eq!(rng.seed(), 42);
    /// ```
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a fresh 64-bit value, used to seed derived generators.
    #[inline]
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen()
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    ///
    /// Uses the ZIGNOR Ziggurat algorithm via `rand_distr::StandardNormal`.
    ///
    /// # Algorithm Reference
    ///
    /// - Marsaglia, G. & Tsang, W. W. (2000). "The Ziggurat Method for
    ///   Generating Random Variables". Journal of Statistical Software.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard normal (mean=0, std=1) variates.
    ///
    /// This is a zero-allocation operation; the buffer must be pre-allocated
    /// by the caller. Empty buffers are handled gracefully (no operation).
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
