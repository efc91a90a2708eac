//! Error types for the Monte Carlo engine.
//!
//! Configuration problems are caught when a [`MonteCarloConfig`](super::MonteCarloConfig)
//! is built; input problems during a simulation surface as
//! [`PricingError`](pricer_core::types::PricingError).

use thiserror::Error;

use super::config::MAX_PATHS;

/// Configuration error for the Monte Carlo pricer.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Path count outside valid range [1, `MAX_PATHS`].
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),
    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
