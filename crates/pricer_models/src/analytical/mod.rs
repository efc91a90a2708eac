//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Standard normal distribution functions used by the formulas
//!
//! ## Design Principles
//!
//! - **Validated construction**: models reject non-positive or non-finite inputs up front
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy in the tails

pub mod black_scholes;
pub mod distributions;

// Re-export main types at module level
pub use black_scholes::{black_scholes_price, BlackScholes};
pub use distributions::norm_cdf;
