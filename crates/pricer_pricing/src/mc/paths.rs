//! Terminal price sampling under Geometric Brownian Motion.
//!
//! European payoffs depend only on the price at maturity, so each path is a
//! single exact draw from the log-normal terminal distribution rather than a
//! discretised trajectory:
//!
//! ```text
//! S(T) = S₀ × exp((μ - ½σ²)T + σ√T × Z),   Z ~ N(0, 1)
//! ```
//!
//! # Parallel sampling
//!
//! [`generate_terminal_prices_parallel`] splits the output into fixed-size
//! chunks of [`PARALLEL_CHUNK_SIZE`] draws. Each chunk owns a generator
//! seeded from the base seed and its chunk index, so the output depends only
//! on the base seed and never on the number of worker threads.

use pricer_core::types::{ensure_finite, ensure_positive, MarketParams, PricingError};
use rayon::prelude::*;

use crate::rng::PricerRng;

/// Number of draws per independently seeded chunk in parallel sampling.
pub const PARALLEL_CHUNK_SIZE: usize = 16_384;

/// Odd 64-bit constant (2⁶⁴/φ) used to spread chunk seeds apart.
const CHUNK_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Parameters for Geometric Brownian Motion sampling.
///
/// # Model
///
/// The GBM model assumes asset prices follow:
/// ```text
/// dS = μ S dt + σ S dW
/// ```
///
/// The drift μ is independent of any discount rate; pricing under the
/// risk-neutral measure uses [`GbmParams::risk_neutral`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2, 1.0).unwrap();
/// assert_eq!(params.drift(), 0.05);
///
/// // Zero volatility is rejected
/// assert!(GbmParams::new(100.0, 0.05, 0.0, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    spot: f64,
    drift: f64,
    volatility: f64,
    maturity: f64,
}

impl GbmParams {
    /// Creates validated GBM parameters.
    ///
    /// # Arguments
    ///
    /// * `spot` - Initial spot price S₀ (> 0)
    /// * `drift` - Annualised drift μ (finite)
    /// * `volatility` - Annualised volatility σ (> 0)
    /// * `maturity` - Horizon T in years (> 0)
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidParameter` naming the first offending input.
    pub fn new(spot: f64, drift: f64, volatility: f64, maturity: f64) -> Result<Self, PricingError> {
        Ok(Self {
            spot: ensure_positive("spot", spot)?,
            drift: ensure_finite("drift", drift)?,
            volatility: ensure_positive("volatility", volatility)?,
            maturity: ensure_positive("maturity", maturity)?,
        })
    }

    /// Risk-neutral dynamics for the given market: μ = r.
    ///
    /// Infallible because [`MarketParams`] is already validated.
    pub fn risk_neutral(params: &MarketParams) -> Self {
        Self {
            spot: params.spot(),
            drift: params.rate(),
            volatility: params.volatility(),
            maturity: params.maturity(),
        }
    }

    /// Initial spot price S₀.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Drift μ.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Horizon T (years).
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Log-space coefficients `((μ - ½σ²)T, σ√T)`.
    #[inline]
    fn log_coefficients(&self) -> (f64, f64) {
        let drift_term = (self.drift - 0.5 * self.volatility * self.volatility) * self.maturity;
        let vol_term = self.volatility * self.maturity.sqrt();
        (drift_term, vol_term)
    }

    /// Maps a standard normal draw `z` to a terminal price.
    ///
    /// The result is non-negative; it is positive unless the exponent
    /// `(μ - ½σ²)T + σ√T·z` underflows (below about -745).
    #[inline]
    pub fn terminal_price(&self, z: f64) -> f64 {
        let (drift_term, vol_term) = self.log_coefficients();
        self.spot * (drift_term + vol_term * z).exp()
    }

    /// Expected terminal price S₀·exp(μT).
    #[inline]
    pub fn expected_terminal_price(&self) -> f64 {
        self.spot * (self.drift * self.maturity).exp()
    }
}

fn ensure_path_count(n_paths: usize) -> Result<(), PricingError> {
    if n_paths == 0 {
        return Err(PricingError::invalid_parameter(
            "n_paths",
            0.0,
            "must be positive",
        ));
    }
    Ok(())
}

/// Transforms a buffer of standard normal draws into terminal prices in place.
#[inline]
fn normals_to_terminal_prices(params: &GbmParams, buffer: &mut [f64]) {
    let (drift_term, vol_term) = params.log_coefficients();
    let spot = params.spot;
    for value in buffer.iter_mut() {
        *value = spot * (drift_term + vol_term * *value).exp();
    }
}

/// Seed for chunk `index` derived from `base_seed`.
#[inline]
fn chunk_seed(base_seed: u64, index: usize) -> u64 {
    base_seed.wrapping_add((index as u64).wrapping_mul(CHUNK_SEED_STRIDE))
}

/// Samples `n_paths` i.i.d. terminal prices from the given generator.
///
/// # Errors
///
/// `PricingError::InvalidParameter` with name `"n_paths"` when `n_paths == 0`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{generate_terminal_prices, GbmParams};
/// use pricer_pricing::rng::PricerRng;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2, 1.0).unwrap();
/// let mut rng = PricerRng::from_seed(42);
///
/// let prices = generate_terminal_prices(&params, 1_000, &mut rng).unwrap();
/// assert_eq!(prices.len(), 1_000);
/// assert!(prices.iter().all(|&s| s > 0.0));
/// ```
pub fn generate_terminal_prices(
    params: &GbmParams,
    n_paths: usize,
    rng: &mut PricerRng,
) -> Result<Vec<f64>, PricingError> {
    ensure_path_count(n_paths)?;

    let mut prices = vec![0.0; n_paths];
    rng.fill_normal(&mut prices);
    normals_to_terminal_prices(params, &mut prices);
    Ok(prices)
}

/// Samples `n_paths` terminal prices across the rayon thread pool.
///
/// Output is a deterministic function of `base_seed`, independent of the
/// number of threads. It is not the same sequence as
/// [`generate_terminal_prices`] with a generator seeded by `base_seed`.
///
/// # Errors
///
/// `PricingError::InvalidParameter` with name `"n_paths"` when `n_paths == 0`.
pub fn generate_terminal_prices_parallel(
    params: &GbmParams,
    n_paths: usize,
    base_seed: u64,
) -> Result<Vec<f64>, PricingError> {
    ensure_path_count(n_paths)?;

    let mut prices = vec![0.0; n_paths];
    prices
        .par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .enumerate()
        .for_each(|(index, chunk)| {
            let mut rng = PricerRng::from_seed(chunk_seed(base_seed, index));
            rng.fill_normal(chunk);
            normals_to_terminal_prices(params, chunk);
        });
    Ok(prices)
}
