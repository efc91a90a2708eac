//! # Pricer Pricing (Layer 3: Monte Carlo Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing turns market parameters into simulated option prices:
//! - Seeded or entropy-seeded random number generation ([`rng`])
//! - Exact terminal-value GBM sampling and Monte Carlo pricing ([`mc`])
//! - Monte Carlo vs Black-Scholes comparison ([`comparison`])
//!
//! Layer 1 (`pricer_core`) supplies `MarketParams`, `OptionType` and
//! `PricingError`; Layer 2 (`pricer_models`) supplies the closed-form prices
//! used as the reference.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::MarketParams;
//! use pricer_pricing::comparison::compare_models;
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let params = MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let config = MonteCarloConfig::builder()
//!     .n_paths(20_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let mut pricer = MonteCarloPricer::new(config);
//!
//! let comparison = compare_models(&params, &mut pricer).unwrap();
//! assert!(comparison.call.difference < 0.5);
//! println!("{}", comparison);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

// Random number generation infrastructure
pub mod rng;

// Monte Carlo kernel
pub mod mc;

// Monte Carlo vs closed-form comparison
pub mod comparison;

// Re-export commonly used items for convenience
pub use comparison::{compare_models, ComparisonRow, ModelComparison};
pub use mc::{GbmParams, MonteCarloConfig, MonteCarloPricer, PricingResult};
pub use rng::PricerRng;
