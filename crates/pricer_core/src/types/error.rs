//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from parameter validation and option type parsing

use thiserror::Error;

/// Categorised pricing errors.
///
/// Both variants are fatal to the calling operation: a pricer either returns
/// a full result or one of these errors, never a partial value.
///
/// # Variants
/// - `InvalidParameter`: Non-positive or non-finite market input, or a zero path count
/// - `InvalidOptionType`: Text that does not name a supported option type
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid_parameter("volatility", 0.0, "must be positive");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'volatility' = 0: must be positive"
/// );
///
/// let err = PricingError::InvalidOptionType("straddle".to_string());
/// assert_eq!(format!("{}", err), "Invalid option type: straddle (expected 'call' or 'put')");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A numeric input violated its domain constraint.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name (e.g. `"spot"`, `"n_paths"`)
        name: &'static str,
        /// The offending value
        value: f64,
        /// Which constraint was violated
        reason: &'static str,
    },

    /// Option type outside {call, put}.
    #[error("Invalid option type: {0} (expected 'call' or 'put')")]
    InvalidOptionType(String),
}

impl PricingError {
    /// Create an `InvalidParameter` error.
    pub fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// Returns the offending parameter name for `InvalidParameter`, `None` otherwise.
    pub fn parameter_name(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { name, .. } => Some(name),
            Self::InvalidOptionType(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = PricingError::invalid_parameter("spot", -100.0, "must be positive");
        assert_eq!(
            format!("{}", err),
            "Invalid parameter 'spot' = -100: must be positive"
        );
    }

    #[test]
    fn test_invalid_parameter_nan_display() {
        let err = PricingError::invalid_parameter("rate", f64::NAN, "must be finite");
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_invalid_option_type_display() {
        let err = PricingError::InvalidOptionType("straddle".to_string());
        assert!(err.to_string().contains("straddle"));
    }

    #[test]
    fn test_parameter_name() {
        let err = PricingError::invalid_parameter("maturity", -1.0, "must be positive");
        assert_eq!(err.parameter_name(), Some("maturity"));

        let err = PricingError::InvalidOptionType("x".to_string());
        assert_eq!(err.parameter_name(), None);
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::invalid_parameter("volatility", 0.0, "must be positive");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::InvalidOptionType("digital".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
