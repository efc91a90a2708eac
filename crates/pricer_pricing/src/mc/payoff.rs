//! European payoffs and sample statistics.

use pricer_core::types::OptionType;

/// Computes the undiscounted payoff for each terminal price.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionType;
/// use pricer_pricing::mc::compute_payoffs;
///
/// let payoffs = compute_payoffs(&[90.0, 100.0, 115.0], 100.0, OptionType::Call);
/// assert_eq!(payoffs, vec![0.0, 0.0, 15.0]);
/// ```
pub fn compute_payoffs(terminal_prices: &[f64], strike: f64, option_type: OptionType) -> Vec<f64> {
    terminal_prices
        .iter()
        .map(|&spot| option_type.intrinsic(spot, strike))
        .collect()
}

/// Sample mean and standard error of the mean.
///
/// The standard error uses the unbiased sample variance (N - 1 denominator)
/// and is zero for a single sample. Returns `(0.0, 0.0)` for an empty slice.
pub fn sample_statistics(values: &[f64]) -> (f64, f64) {
    let n = values.len();
    if n == 0 {
        return (0.0, 0.0);
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    if n == 1 {
        return (mean, 0.0);
    }

    let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    (mean, (variance / n as f64).sqrt())
}
