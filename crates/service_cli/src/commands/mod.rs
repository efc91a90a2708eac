//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod compare;
pub mod price;
pub mod simulate;

use pricer_pricing::mc::{GbmParams, MonteCarloPricer};
use tracing::{debug, info};

use crate::config::ScenarioConfig;
use crate::visualisation::DistributionPlot;
use crate::Result;

/// Builds the Monte Carlo pricer for a validated scenario.
fn build_pricer(config: &ScenarioConfig) -> Result<MonteCarloPricer> {
    let pricer = MonteCarloPricer::new(config.monte_carlo_config()?);
    info!(
        n_paths = config.n_paths,
        seed = pricer.seed(),
        parallel = config.parallel,
        "Monte Carlo pricer ready"
    );
    Ok(pricer)
}

/// Simulates terminal prices under `gbm` and renders the distribution chart.
fn render_distribution(
    config: &ScenarioConfig,
    pricer: &mut MonteCarloPricer,
    gbm: &GbmParams,
) -> Result<(Vec<f64>, String)> {
    let terminal_prices = pricer.simulate_terminal_prices(gbm)?;
    let plot = DistributionPlot::new(&terminal_prices, gbm.spot(), config.bins)?;
    debug!(
        bins = plot.histogram().counts().len(),
        max_count = plot.histogram().max_count(),
        mean = plot.mean(),
        "Rendering terminal price distribution"
    );
    let chart = plot.render(config.chart_width, config.chart_height);
    Ok((terminal_prices, chart))
}
