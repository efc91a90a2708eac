//! Monte Carlo vs Black-Scholes comparison.
//!
//! [`compare_models`] prices a call and a put with both methods on the same
//! parameters; [`ModelComparison`] renders the console report through
//! `Display`.

use std::fmt;

use pricer_core::types::{MarketParams, OptionType, PricingError};
use pricer_models::analytical::black_scholes_price;
use tracing::info;

use crate::mc::{MonteCarloPricer, PricingResult};

/// Width of the separator lines in the report.
const RULE_WIDTH: usize = 50;

/// Both prices for one option type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonRow {
    /// Option type priced in this row.
    pub option_type: OptionType,
    /// Monte Carlo estimate.
    pub monte_carlo: PricingResult,
    /// Closed-form Black-Scholes price.
    pub black_scholes: f64,
    /// Absolute difference |MC - BS|.
    pub difference: f64,
}

impl ComparisonRow {
    /// Pairs a Monte Carlo estimate with the closed-form price.
    pub fn new(option_type: OptionType, monte_carlo: PricingResult, black_scholes: f64) -> Self {
        Self {
            option_type,
            monte_carlo,
            black_scholes,
            difference: (monte_carlo.price - black_scholes).abs(),
        }
    }

    /// Difference expressed in Monte Carlo standard errors.
    ///
    /// Returns `None` when the standard error is zero.
    pub fn standard_errors(&self) -> Option<f64> {
        (self.monte_carlo.std_error > 0.0).then(|| self.difference / self.monte_carlo.std_error)
    }
}

/// Call and put comparison for one simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelComparison {
    /// Number of Monte Carlo paths per option type.
    pub n_paths: usize,
    /// Call row.
    pub call: ComparisonRow,
    /// Put row.
    pub put: ComparisonRow,
}

impl ModelComparison {
    /// Rows in report order (call, then put).
    pub fn rows(&self) -> [&ComparisonRow; 2] {
        [&self.call, &self.put]
    }
}

impl fmt::Display for ModelComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(f, "Option Pricing Comparison ({} Simulations)", self.n_paths)?;
        for (index, row) in self.rows().into_iter().enumerate() {
            writeln!(f, "{}", rule)?;
            let label = row.option_type.label();
            writeln!(
                f,
                "{} Option Price (Monte Carlo):  {:.4}",
                label, row.monte_carlo.price
            )?;
            writeln!(
                f,
                "{} Option Price (Black-Scholes): {:.4}",
                label, row.black_scholes
            )?;
            write!(f, "Difference ({}): {:.4}", label, row.difference)?;
            if index == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Prices call and put with Monte Carlo and Black-Scholes.
///
/// The call is simulated first, then the put, each on fresh draws from the
/// pricer's generator.
///
/// # Errors
///
/// Propagates `PricingError` from the Monte Carlo pricer.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::MarketParams;
/// use pricer_pricing::comparison::compare_models;
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let params = MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let config = MonteCarloConfig::builder().n_paths(1_000).seed(1).build().unwrap();
/// let mut pricer = MonteCarloPricer::new(config);
///
/// let comparison = compare_models(&params, &mut pricer).unwrap();
/// assert!(comparison.to_string().starts_with("Option Pricing Comparison (1000 Simulations)"));
/// ```
pub fn compare_models(
    params: &MarketParams,
    pricer: &mut MonteCarloPricer,
) -> Result<ModelComparison, PricingError> {
    let mut rows = Vec::with_capacity(OptionType::ALL.len());
    for option_type in OptionType::ALL {
        let monte_carlo = pricer.price_european(params, option_type)?;
        let black_scholes = black_scholes_price(params, option_type);
        let row = ComparisonRow::new(option_type, monte_carlo, black_scholes);
        info!(
            %option_type,
            monte_carlo = row.monte_carlo.price,
            black_scholes = row.black_scholes,
            difference = row.difference,
            "compared pricing models"
        );
        rows.push(row);
    }

    Ok(ModelComparison {
        n_paths: pricer.config().n_paths(),
        call: rows[0],
        put: rows[1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(option_type: OptionType, mc: f64, bs: f64) -> ComparisonRow {
        ComparisonRow::new(
            option_type,
            PricingResult {
                price: mc,
                std_error: 0.05,
                n_paths: 100_000,
            },
            bs,
        )
    }

    #[test]
    fn test_difference_is_absolute() {
        assert!((row(OptionType::Call, 10.4, 10.45).difference - 0.05).abs() < 1e-12);
        assert!((row(OptionType::Put, 5.6, 5.55).difference - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_standard_errors() {
        let r = row(OptionType::Call, 10.35, 10.45);
        assert!((r.standard_errors().unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_format() {
        let comparison = ModelComparison {
            n_paths: 100_000,
            call: row(OptionType::Call, 10.46021, 10.450583572185565),
            put: row(OptionType::Put, 5.56, 5.573526022256971),
        };

        let expected = "\
Option Pricing Comparison (100000 Simulations)
--------------------------------------------------
Call Option Price (Monte Carlo):  10.4602
Call Option Price (Black-Scholes): 10.4506
Difference (Call): 0.0096
--------------------------------------------------
Put Option Price (Monte Carlo):  5.5600
Put Option Price (Black-Scholes): 5.5735
Difference (Put): 0.0135";

        assert_eq!(comparison.to_string(), expected);
    }
}
