//! # Random Number Generation Infrastructure
//!
//! This module provides the pseudo-random number generator used by the
//! Monte Carlo engine.
//!
//! ## Design Rationale
//!
//! - **Explicit state**: The generator is passed by `&mut` to every sampler; there is no
//!   process-wide random state
//! - **Reproducibility**: Every generator records its seed, including entropy-seeded ones,
//!   so any run can be replayed
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Generate standard normal variates (mean=0, std=1)
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//!
//! // Production use: seed drawn from system entropy, still recorded
//! let rng = PricerRng::from_entropy();
//! let _replay = PricerRng::from_seed(rng.seed());
//! ```
//!
//! ## Algorithms
//!
//! - Base generator: `rand::rngs::StdRng`
//! - Normal: Ziggurat algorithm (`rand_distr::StandardNormal`)

mod prng;

// Public re-exports
pub use prng::PricerRng;
