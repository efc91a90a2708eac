//! Monte Carlo pricing engine.
//!
//! This module provides the orchestration layer for Monte Carlo pricing.
//!
//! # Overview
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Random number generation (via [`PricerRng`])
//! 2. Terminal price sampling (via [`generate_terminal_prices`])
//! 3. Payoff computation (via [`compute_payoffs`])
//! 4. Discounting and aggregation

use pricer_core::types::{MarketParams, OptionType, PricingError};
use tracing::{debug, info};

use super::config::MonteCarloConfig;
use super::paths::{generate_terminal_prices, generate_terminal_prices_parallel, GbmParams};
use super::payoff::{compute_payoffs, sample_statistics};
use crate::rng::PricerRng;

/// Monte Carlo price estimate.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 10.5,
///     std_error: 0.05,
///     n_paths: 100_000,
/// };
///
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PricingResult {
    /// Present value of the option (discounted mean payoff).
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Number of simulated paths.
    pub n_paths: usize,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }

    /// Aggregates terminal prices into a discounted price estimate.
    fn from_terminal_prices(
        terminal_prices: &[f64],
        params: &MarketParams,
        option_type: OptionType,
    ) -> Self {
        let payoffs = compute_payoffs(terminal_prices, params.strike(), option_type);
        let (mean, std_error) = sample_statistics(&payoffs);
        let discount_factor = params.discount_factor();

        Self {
            price: mean * discount_factor,
            std_error: std_error * discount_factor,
            n_paths: terminal_prices.len(),
        }
    }
}

/// Prices a European option with `n_paths` draws from `rng`.
///
/// Samples terminal prices with drift μ = r, averages the payoff and
/// discounts by exp(-rT).
///
/// # Errors
///
/// `PricingError::InvalidParameter` when `n_paths == 0`.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{MarketParams, OptionType};
/// use pricer_pricing::mc::monte_carlo_price;
/// use pricer_pricing::rng::PricerRng;
///
/// let params = MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let mut rng = PricerRng::from_seed(42);
///
/// let result = monte_carlo_price(&params, OptionType::Call, 50_000, &mut rng).unwrap();
/// assert!((result.price - 10.4506).abs() < 5.0 * result.std_error);
/// ```
pub fn monte_carlo_price(
    params: &MarketParams,
    option_type: OptionType,
    n_paths: usize,
    rng: &mut PricerRng,
) -> Result<PricingResult, PricingError> {
    let gbm = GbmParams::risk_neutral(params);
    let terminal_prices = generate_terminal_prices(&gbm, n_paths, rng)?;
    Ok(PricingResult::from_terminal_prices(
        &terminal_prices,
        params,
        option_type,
    ))
}

/// Monte Carlo pricing engine.
///
/// Owns its configuration and generator; successive calls consume fresh
/// draws from the same stream until [`reset`](Self::reset) is called.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{MarketParams, OptionType};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut pricer = MonteCarloPricer::new(config);
/// let params = MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
///
/// let result = pricer.price_european(&params, OptionType::Put).unwrap();
/// println!("Price: {} +/- {}", result.price, result.std_error);
/// ```
#[derive(Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
    rng: PricerRng,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// Without a configured seed the generator is seeded from system entropy;
    /// the drawn seed is logged at `info` level so the run can be replayed.
    pub fn new(config: MonteCarloConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => PricerRng::from_seed(seed),
            None => {
                let rng = PricerRng::from_entropy();
                info!(seed = rng.seed(), "seeded Monte Carlo generator from entropy");
                rng
            }
        };
        debug!(
            n_paths = config.n_paths(),
            parallel = config.parallel(),
            seed = rng.seed(),
            "created Monte Carlo pricer"
        );

        Self { config, rng }
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Seed the current generator stream started from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Restarts the generator stream from its original seed.
    pub fn reset(&mut self) {
        self.rng = PricerRng::from_seed(self.rng.seed());
    }

    /// Samples `n_paths` terminal prices under the given dynamics.
    ///
    /// In parallel mode a base seed is drawn from the pricer's generator, so
    /// the output stays a deterministic function of the configured seed.
    ///
    /// # Errors
    ///
    /// Propagates `PricingError` from the sampler.
    pub fn simulate_terminal_prices(&mut self, gbm: &GbmParams) -> Result<Vec<f64>, PricingError> {
        let n_paths = self.config.n_paths();
        debug!(n_paths, parallel = self.config.parallel(), "sampling terminal prices");

        if self.config.parallel() {
            let base_seed = self.rng.next_seed();
            generate_terminal_prices_parallel(gbm, n_paths, base_seed)
        } else {
            generate_terminal_prices(gbm, n_paths, &mut self.rng)
        }
    }

    /// Prices a European option using Monte Carlo simulation.
    ///
    /// # Returns
    ///
    /// Price, standard error and path count.
    ///
    /// # Errors
    ///
    /// Propagates `PricingError` from the sampler.
    pub fn price_european(
        &mut self,
        params: &MarketParams,
        option_type: OptionType,
    ) -> Result<PricingResult, PricingError> {
        let gbm = GbmParams::risk_neutral(params);
        let terminal_prices = self.simulate_terminal_prices(&gbm)?;
        let result = PricingResult::from_terminal_prices(&terminal_prices, params, option_type);

        debug!(
            %option_type,
            price = result.price,
            std_error = result.std_error,
            "Monte Carlo price"
        );
        Ok(result)
    }
}
