//! Simulate command implementation
//!
//! Samples terminal prices and prints the distribution chart with summary
//! statistics. The drift defaults to the risk-free rate but may be set
//! independently.

use pricer_pricing::mc::GbmParams;
use tracing::{debug, info};

use super::{build_pricer, render_distribution};
use crate::config::ScenarioConfig;
use crate::report::{SampleSummary, SimulationReport};
use crate::visualisation::VisualisationError;
use crate::Result;

/// Run the simulate command.
pub fn run(config: &ScenarioConfig, drift: Option<f64>, plot: bool) -> Result<String> {
    let drift = drift.unwrap_or(config.rate);
    let gbm = GbmParams::new(config.spot, drift, config.volatility, config.maturity)?;
    let mut pricer = build_pricer(config)?;
    debug!(drift, "Sampling under real-world drift");

    let mut output = String::new();
    let terminal_prices = if plot {
        let (terminal_prices, chart) = render_distribution(config, &mut pricer, &gbm)?;
        output.push_str(&chart);
        output.push('\n');
        terminal_prices
    } else {
        pricer.simulate_terminal_prices(&gbm)?
    };

    let summary =
        SampleSummary::from_samples(&terminal_prices).ok_or(VisualisationError::EmptySamples)?;
    info!(mean = summary.mean, "Simulation complete");
    let report = SimulationReport {
        summary,
        expected_mean: gbm.expected_terminal_price(),
    };
    output.push_str(&report.to_string());
    Ok(output)
}
