//! Standard normal distribution functions.
//!
//! `norm_cdf` is expressed through the complementary error function from
//! `statrs`, which keeps relative precision deep in the lower tail where
//! `1 - erf` would cancel. Absolute error is around 1e-11 near |x| = 1.

use statrs::function::erf::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0);
/// assert!((cdf_0 - 0.5).abs() < 1e-15);
///
/// let cdf_neg = norm_cdf(-3.0);
/// assert!(cdf_neg < 0.01);
///
/// let cdf_pos = norm_cdf(3.0);
/// assert!(cdf_pos > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}
