//! # pricer_core: Foundation Types for European Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option type enumeration: `OptionType` (`types::option`)
//! - Validated market and contract inputs: `MarketParams` (`types::params`)
//! - Error taxonomy: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{MarketParams, OptionType};
//!
//! let params = MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! assert_eq!(params.spot(), 100.0);
//!
//! let option_type: OptionType = "put".parse().unwrap();
//! assert_eq!(option_type, OptionType::Put);
//! assert_eq!(option_type.intrinsic(90.0, 100.0), 10.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
