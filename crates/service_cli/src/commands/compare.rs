//! Compare command implementation
//!
//! Runs the reference workflow: terminal price histogram under the
//! risk-neutral drift, then the call/put comparison report.

use pricer_pricing::comparison::compare_models;
use pricer_pricing::mc::GbmParams;
use tracing::info;

use super::{build_pricer, render_distribution};
use crate::config::ScenarioConfig;
use crate::Result;

/// Run the compare command and return the text to print.
pub fn run(config: &ScenarioConfig, plot: bool) -> Result<String> {
    let params = config.market_params()?;
    let mut pricer = build_pricer(config)?;

    let mut output = String::new();
    if plot {
        let gbm = GbmParams::risk_neutral(&params);
        let (_, chart) = render_distribution(config, &mut pricer, &gbm)?;
        output.push_str(&chart);
        output.push('\n');
    }

    let comparison = compare_models(&params, &mut pricer)?;
    info!(
        call_difference = comparison.call.difference,
        put_difference = comparison.put.difference,
        "Comparison complete"
    );
    output.push_str(&comparison.to_string());
    Ok(output)
}
