//! Console reports for single-option pricing and terminal price samples.
//!
//! The call/put comparison report is the `Display` implementation of
//! `ModelComparison`; this module covers the `price` and `simulate` commands.

use std::fmt;

use pricer_pricing::comparison::ComparisonRow;
use pricer_pricing::mc::sample_statistics;

/// Width of the separator lines, matching the comparison report.
const RULE_WIDTH: usize = 50;

/// Report for one option type priced with both methods.
#[derive(Clone, Copy, Debug)]
pub struct PriceReport<'a> {
    /// Monte Carlo and Black-Scholes prices for the option type.
    pub row: &'a ComparisonRow,
    /// Seed of the generator that produced the Monte Carlo estimate.
    pub seed: u64,
}

impl fmt::Display for PriceReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.row;
        let label = row.option_type.label();
        let mc = &row.monte_carlo;

        writeln!(
            f,
            "{} Option Pricing ({} Simulations, seed {})",
            label, mc.n_paths, self.seed
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, "{} Option Price (Monte Carlo):  {:.4}", label, mc.price)?;
        writeln!(f, "Standard Error:                 {:.4}", mc.std_error)?;
        writeln!(
            f,
            "95% Confidence Interval:        [{:.4}, {:.4}]",
            mc.price - mc.confidence_95(),
            mc.price + mc.confidence_95()
        )?;
        writeln!(f, "{} Option Price (Black-Scholes): {:.4}", label, row.black_scholes)?;
        write!(f, "Difference ({}): {:.4}", label, row.difference)?;
        if let Some(errors) = row.standard_errors() {
            write!(f, " ({:.2} standard errors)", errors)?;
        }
        Ok(())
    }
}

/// Descriptive statistics of a terminal price sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    /// Sample size
    pub count: usize,
    /// Sample mean
    pub mean: f64,
    /// Sample standard deviation (N - 1 denominator)
    pub std_dev: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl SampleSummary {
    /// Summarises `samples`; `None` for an empty slice.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let count = samples.len();
        // Standard error of the mean scaled back to the sample deviation
        let (mean, std_error) = sample_statistics(samples);
        let std_dev = std_error * (count as f64).sqrt();
        let (min, max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        Some(Self {
            count,
            mean,
            std_dev,
            min,
            max,
        })
    }
}

/// Report for the `simulate` command.
#[derive(Clone, Copy, Debug)]
pub struct SimulationReport {
    /// Statistics of the simulated terminal prices.
    pub summary: SampleSummary,
    /// Analytical mean S0·exp(μT) under the sampling drift.
    pub expected_mean: f64,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.summary;
        writeln!(f, "Terminal Price Sample ({} Simulations)", summary.count)?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, "Mean:               {:.4}", summary.mean)?;
        writeln!(f, "Expected Mean:      {:.4}", self.expected_mean)?;
        writeln!(f, "Standard Deviation: {:.4}", summary.std_dev)?;
        writeln!(f, "Minimum:            {:.4}", summary.min)?;
        write!(f, "Maximum:            {:.4}", summary.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionType;
    use pricer_pricing::mc::PricingResult;

    fn sample_row() -> ComparisonRow {
        let monte_carlo = PricingResult {
            price: 5.6,
            std_error: 0.02,
            n_paths: 100_000,
        };
        ComparisonRow::new(OptionType::Put, monte_carlo, 5.573526022256971)
    }

    #[test]
    fn test_price_report_lines() {
        let row = sample_row();
        let report = PriceReport { row: &row, seed: 42 }.to_string();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Put Option Pricing (100000 Simulations, seed 42)");
        assert_eq!(lines[1], "-".repeat(50));
        assert_eq!(lines[2], "Put Option Price (Monte Carlo):  5.6000");
        assert_eq!(lines[4], "95% Confidence Interval:        [5.5608, 5.6392]");
        assert_eq!(lines[5], "Put Option Price (Black-Scholes): 5.5735");
        assert_eq!(lines[6], "Difference (Put): 0.0265 (1.32 standard errors)");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_summary_statistics() {
        let summary = SampleSummary::from_samples(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(summary.count, 4);
        assert_relative_eq!(summary.mean, 2.5);
        assert_relative_eq!(summary.std_dev, (5.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
    }

    #[test]
    fn test_summary_agrees_with_pricing_statistics() {
        let samples = [98.5, 101.2, 104.9, 95.3, 110.0];
        let (mean, std_error) = sample_statistics(&samples);
        let summary = SampleSummary::from_samples(&samples).unwrap();
        assert_eq!(summary.mean, mean);
        assert_relative_eq!(summary.std_dev / 5.0_f64.sqrt(), std_error, epsilon = 1e-12);
    }

    #[test]
    fn test_summary_single_and_empty() {
        let single = SampleSummary::from_samples(&[3.0]).unwrap();
        assert_eq!(single.std_dev, 0.0);
        assert!(SampleSummary::from_samples(&[]).is_none());
    }

    #[test]
    fn test_simulation_report() {
        let summary = SampleSummary::from_samples(&[99.0, 101.0]).unwrap();
        let report = SimulationReport {
            summary,
            expected_mean: 105.127,
        }
        .to_string();
        assert!(report.starts_with("Terminal Price Sample (2 Simulations)"));
        assert!(report.contains("Mean:               100.0000"));
        assert!(report.contains("Expected Mean:      105.1270"));
        assert!(report.ends_with("Maximum:            101.0000"));
    }
}
