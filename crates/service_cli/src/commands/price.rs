//! Price command implementation
//!
//! Prices one option type with Monte Carlo and Black-Scholes.

use pricer_core::types::OptionType;
use pricer_models::analytical::black_scholes_price;
use pricer_pricing::comparison::ComparisonRow;
use tracing::info;

use super::build_pricer;
use crate::config::ScenarioConfig;
use crate::report::PriceReport;
use crate::Result;

/// Run the price command.
///
/// `option_type` is parsed case-insensitively; anything other than `call`
/// or `put` is rejected before any simulation runs.
pub fn run(config: &ScenarioConfig, option_type: &str) -> Result<String> {
    let option_type: OptionType = option_type.parse()?;
    let params = config.market_params()?;
    let mut pricer = build_pricer(config)?;

    info!(%option_type, "Starting pricing...");
    let monte_carlo = pricer.price_european(&params, option_type)?;
    let black_scholes = black_scholes_price(&params, option_type);
    let row = ComparisonRow::new(option_type, monte_carlo, black_scholes);

    info!("Pricing complete");
    Ok(PriceReport {
        row: &row,
        seed: pricer.seed(),
    }
    .to_string())
}
