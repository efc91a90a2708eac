//! Option type definitions.
//!
//! A closed two-variant enumeration: every `match` on [`OptionType`] is
//! exhaustive, so an unsupported option type can only appear at the text
//! boundary (see the [`FromStr`] implementation).

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// European option type.
///
/// Determines the payoff shape and the sign of the CDF arguments in the
/// closed-form price.
///
/// # Variants
/// - `Call`: max(S - K, 0)
/// - `Put`: max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
/// assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
///
/// let parsed: Result<OptionType, _> = "straddle".parse();
/// assert!(parsed.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Both option types, in report order.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Payoff at maturity for terminal price `spot` and strike `strike`.
    ///
    /// Always non-negative.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Lower-case identifier (`"call"` / `"put"`).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }

    /// Capitalised label used in console reports (`"Call"` / `"Put"`).
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Parses `"call"` or `"put"` (case-insensitive, surrounding whitespace ignored).
    ///
    /// # Errors
    /// `PricingError::InvalidOptionType` for any other input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}
