//! Monte Carlo pricing of European options under GBM.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (path count, seed, parallel flag)
//! ├── PricerRng         (random number generation)
//! └── Orchestration
//!     ├── generate_terminal_prices()
//!     ├── compute_payoffs()
//!     └── sample_statistics()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::{MarketParams, OptionType};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(10_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut pricer = MonteCarloPricer::new(config);
//! let params = MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//!
//! let call = pricer.price_european(&params, OptionType::Call).unwrap();
//! let put = pricer.price_european(&params, OptionType::Put).unwrap();
//! println!("Call: {:.4} +/- {:.4}", call.price, call.confidence_95());
//! println!("Put:  {:.4} +/- {:.4}", put.price, put.confidence_95());
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod payoff;
pub mod pricer;

// Re-exports for convenient access
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS};
pub use error::ConfigError;
pub use paths::{
    generate_terminal_prices, generate_terminal_prices_parallel, GbmParams, PARALLEL_CHUNK_SIZE,
};
pub use payoff::{compute_payoffs, sample_statistics};
pub use pricer::{monte_carlo_price, MonteCarloPricer, PricingResult};
