//! Monte Carlo convergence to the closed-form Black-Scholes price.
//!
//! # Test Categories
//!
//! 1. **Reference scenario**: S0=100, K=100, T=1, r=5%, σ=20%, N=100,000
//! 2. **Convergence**: standard error shrinks as O(1/√N)
//! 3. **Comparison report**: `compare_models` end to end

use approx::assert_relative_eq;
use pricer_core::types::{MarketParams, OptionType};
use pricer_models::analytical::black_scholes_price;
use pricer_pricing::comparison::compare_models;
use pricer_pricing::mc::{monte_carlo_price, MonteCarloConfig, MonteCarloPricer};
use pricer_pricing::rng::PricerRng;

/// Agreement band in Monte Carlo standard errors (two-sided 3σ, ~99.7%).
const SE_TOLERANCE: f64 = 3.0;

fn reference_params() -> MarketParams {
    MarketParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
}

fn seeded_pricer(n_paths: usize, seed: u64, parallel: bool) -> MonteCarloPricer {
    let config = MonteCarloConfig::builder()
        .n_paths(n_paths)
        .seed(seed)
        .parallel(parallel)
        .build()
        .unwrap();
    MonteCarloPricer::new(config)
}

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_call_within_standard_errors_of_black_scholes() {
    let params = reference_params();
    let mut rng = PricerRng::from_seed(42);
    let mc = monte_carlo_price(&params, OptionType::Call, 100_000, &mut rng).unwrap();
    let bs = black_scholes_price(&params, OptionType::Call);

    assert_relative_eq!(bs, 10.4506, epsilon = 1e-4);
    assert!(
        (mc.price - bs).abs() <= SE_TOLERANCE * mc.std_error,
        "MC {} vs BS {} (se {})",
        mc.price,
        bs,
        mc.std_error
    );
}

#[test]
fn test_put_within_standard_errors_of_black_scholes() {
    let params = reference_params();
    let mut rng = PricerRng::from_seed(42);
    let mc = monte_carlo_price(&params, OptionType::Put, 100_000, &mut rng).unwrap();
    let bs = black_scholes_price(&params, OptionType::Put);

    assert_relative_eq!(bs, 5.5735, epsilon = 1e-4);
    assert!((mc.price - bs).abs() <= SE_TOLERANCE * mc.std_error);
}

#[test]
fn test_parallel_pricing_within_standard_errors() {
    let params = reference_params();
    let mut pricer = seeded_pricer(100_000, 7, true);

    for option_type in OptionType::ALL {
        let mc = pricer.price_european(&params, option_type).unwrap();
        let bs = black_scholes_price(&params, option_type);
        assert!((mc.price - bs).abs() <= SE_TOLERANCE * mc.std_error);
    }
}

#[test]
fn test_other_market_scenarios() {
    // ITM put, OTM call, negative rate
    let scenarios = [
        (MarketParams::new(90.0, 110.0, 0.5, 0.02, 0.3).unwrap(), OptionType::Put),
        (MarketParams::new(100.0, 130.0, 2.0, 0.01, 0.25).unwrap(), OptionType::Call),
        (MarketParams::new(100.0, 100.0, 1.0, -0.01, 0.15).unwrap(), OptionType::Call),
    ];

    for (index, (params, option_type)) in scenarios.iter().enumerate() {
        let mut rng = PricerRng::from_seed(100 + index as u64);
        let mc = monte_carlo_price(params, *option_type, 100_000, &mut rng).unwrap();
        let bs = black_scholes_price(params, *option_type);
        assert!(
            (mc.price - bs).abs() <= SE_TOLERANCE * mc.std_error,
            "scenario {}: MC {} vs BS {}",
            index,
            mc.price,
            bs
        );
    }
}

// ============================================================================
// Convergence
// ============================================================================

#[test]
fn test_standard_error_scales_with_inverse_sqrt_paths() {
    let params = reference_params();
    let mut rng_small = PricerRng::from_seed(1);
    let mut rng_large = PricerRng::from_seed(2);

    let small = monte_carlo_price(&params, OptionType::Call, 10_000, &mut rng_small).unwrap();
    let large = monte_carlo_price(&params, OptionType::Call, 1_000_000, &mut rng_large).unwrap();

    // 100x paths -> 10x smaller standard error
    let ratio = small.std_error / large.std_error;
    assert!((8.0..12.5).contains(&ratio), "ratio = {}", ratio);
}

// ============================================================================
// Comparison
// ============================================================================

#[test]
fn test_compare_models_reference_scenario() {
    let params = reference_params();
    let mut pricer = seeded_pricer(100_000, 42, false);

    let comparison = compare_models(&params, &mut pricer).unwrap();

    assert_eq!(comparison.n_paths, 100_000);
    assert_eq!(comparison.call.option_type, OptionType::Call);
    assert_eq!(comparison.put.option_type, OptionType::Put);
    assert_relative_eq!(comparison.call.black_scholes, 10.450583572185565, epsilon = 1e-8);
    assert_relative_eq!(comparison.put.black_scholes, 5.573526022256971, epsilon = 1e-8);

    for row in comparison.rows() {
        assert!(row.monte_carlo.price >= 0.0);
        assert!(row.difference <= SE_TOLERANCE * row.monte_carlo.std_error);
    }
}

#[test]
fn test_compare_models_report_lines() {
    let mut pricer = seeded_pricer(100_000, 42, false);
    let report = compare_models(&reference_params(), &mut pricer)
        .unwrap()
        .to_string();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "Option Pricing Comparison (100000 Simulations)");
    assert_eq!(lines[1], "-".repeat(50));
    assert!(lines[2].starts_with("Call Option Price (Monte Carlo):  "));
    assert_eq!(lines[3], "Call Option Price (Black-Scholes): 10.4506");
    assert!(lines[4].starts_with("Difference (Call): "));
    assert_eq!(lines[5], "-".repeat(50));
    assert_eq!(lines[7], "Put Option Price (Black-Scholes): 5.5735");
    assert!(lines[8].starts_with("Difference (Put): "));
}
