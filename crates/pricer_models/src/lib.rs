//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form European option pricing.
//!
//! This crate provides:
//! - Standard normal CDF/PDF (`analytical::distributions`)
//! - The Black-Scholes model for European calls and puts (`analytical::black_scholes`)
//!
//! The Monte Carlo engine in `pricer_pricing` is validated against these
//! prices, so they are kept deterministic and accurate to near machine precision.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
