//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options in closed form.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::types::{ensure_finite, ensure_positive, MarketParams, OptionType, PricingError};

use super::distributions::norm_cdf;

/// Black-Scholes model for European option pricing.
///
/// Holds the model state (spot, rate, volatility); the contract terms
/// (strike, expiry) are supplied per pricing call.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, finite)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if spot <= 0, volatility <= 0, or
    /// any input is non-finite.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, PricingError> {
        Ok(Self {
            spot: ensure_positive("spot", spot)?,
            rate: ensure_finite("rate", rate)?,
            volatility: ensure_positive("volatility", volatility)?,
        })
    }

    /// Builds the model from validated market parameters.
    #[inline]
    pub fn from_params(params: &MarketParams) -> Self {
        Self {
            spot: params.spot(),
            rate: params.rate(),
            volatility: params.volatility(),
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Callers must pass `strike > 0` and `expiry > 0`.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// Callers must pass `strike > 0` and `expiry > 0`; use [`BlackScholes::price`]
    /// for a validated entry point.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0);
    /// assert!((price - 10.4506).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        // Cancellation deep out of the money can leave a tiny negative residue
        (self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)).max(0.0)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let price = bs.price_put(100.0, 1.0);
    /// assert!((price - 5.5735).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        (strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)).max(0.0)
    }

    /// Prices a European option of the given type after validating the contract terms.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if strike or expiry is non-positive or non-finite.
    pub fn price(
        &self,
        option_type: OptionType,
        strike: f64,
        expiry: f64,
    ) -> Result<f64, PricingError> {
        let strike = ensure_positive("strike", strike)?;
        let expiry = ensure_positive("maturity", expiry)?;

        Ok(match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        })
    }
}

/// Closed-form Black-Scholes price for validated market parameters.
///
/// # Examples
/// ```
/// use pricer_core::types::{MarketParams, OptionType};
/// use pricer_models::analytical::black_scholes_price;
///
/// let params = MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let call = black_scholes_price(&params, OptionType::Call);
/// assert!((call - 10.4506).abs() < 1e-4);
/// ```
pub fn black_scholes_price(params: &MarketParams, option_type: OptionType) -> f64 {
    let model = BlackScholes::from_params(params);
    match option_type {
        OptionType::Call => model.price_call(params.strike(), params.maturity()),
        OptionType::Put => model.price_put(params.strike(), params.maturity()),
    }
}
