//! Core financial types shared by every pricing layer.
//!
//! This module provides:
//! - `option`: Call/put enumeration with payoff evaluation
//! - `params`: Validated spot, strike, maturity, rate and volatility inputs
//! - `error`: Structured error types for pricing operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`] from `option`
//! - [`MarketParams`], [`ensure_positive`], [`ensure_finite`] from `params`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option;
pub mod params;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use option::OptionType;
pub use params::{ensure_finite, ensure_positive, MarketParams};
