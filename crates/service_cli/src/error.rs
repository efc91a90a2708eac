//! Error types for the mcbs CLI.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::visualisation::VisualisationError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid pricing input or option type
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Invalid Monte Carlo engine configuration
    #[error("Monte Carlo configuration error: {0}")]
    MonteCarlo(#[from] pricer_pricing::mc::ConfigError),

    /// Scenario configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Histogram or chart error
    #[error("Visualisation error: {0}")]
    Visualisation(#[from] VisualisationError),
}

/// Result alias used by the command implementations.
pub type Result<T> = std::result::Result<T, CliError>;
