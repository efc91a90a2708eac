//! Validated market and contract parameters.
//!
//! This module provides [`MarketParams`], the immutable input bundle shared by
//! the analytical and Monte Carlo pricers, together with the validation
//! helpers both layers use for their own inputs.

use super::error::PricingError;

/// Check that `value` is finite.
///
/// # Errors
/// `PricingError::InvalidParameter` for NaN or ±∞.
#[inline]
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::invalid_parameter(name, value, "must be finite"))
    }
}

/// Check that `value` is finite and strictly positive.
///
/// # Errors
/// `PricingError::InvalidParameter` for NaN, ±∞, zero or negative values.
#[inline]
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64, PricingError> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(PricingError::invalid_parameter(name, value, "must be positive"))
    }
}

/// Market and contract inputs for a European option.
///
/// Constructed only through [`MarketParams::new`], so every instance satisfies:
/// - `spot`, `strike`, `maturity`, `volatility` finite and > 0
/// - `rate` finite (may be zero or negative)
///
/// # Examples
/// ```
/// use pricer_core::types::MarketParams;
///
/// let params = MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert!((params.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
///
/// // Zero volatility is rejected
/// assert!(MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketParams {
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
}

impl MarketParams {
    /// Creates validated parameters.
    ///
    /// # Arguments
    /// * `spot` - Current spot price S0 (> 0)
    /// * `strike` - Strike price K (> 0)
    /// * `maturity` - Time to maturity T in years (> 0)
    /// * `rate` - Continuously compounded risk-free rate r (finite)
    /// * `volatility` - Annualised volatility σ (> 0)
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending input.
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        Ok(Self {
            spot: ensure_positive("spot", spot)?,
            strike: ensure_positive("strike", strike)?,
            maturity: ensure_positive("maturity", maturity)?,
            rate: ensure_finite("rate", rate)?,
            volatility: ensure_positive("volatility", volatility)?,
        })
    }

    /// Spot price S0.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to maturity T (years).
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Risk-free rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Discount factor exp(-r·T).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Strike discounted to today, K·exp(-r·T).
    #[inline]
    pub fn discounted_strike(&self) -> f64 {
        self.strike * self.discount_factor()
    }
}
