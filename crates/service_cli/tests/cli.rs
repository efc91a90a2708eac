//! End-to-end tests of the `mcbs` binary.

use std::process::Command;

fn mcbs() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_mcbs"));
    // Isolate from the caller's environment
    for var in [
        "MCBS_SPOT",
        "MCBS_STRIKE",
        "MCBS_MATURITY",
        "MCBS_RATE",
        "MCBS_VOLATILITY",
        "MCBS_PATHS",
        "MCBS_SEED",
        "RUST_LOG",
    ] {
        command.env_remove(var);
    }
    command
}

#[test]
fn test_default_run_prints_chart_and_report() {
    let output = mcbs()
        .args(["--seed", "42", "--paths", "20000"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Stock Price Distribution at Maturity"));
    assert!(stdout.contains("Option Pricing Comparison (20000 Simulations)"));
    assert!(stdout.contains("Call Option Price (Black-Scholes): 10.4506"));
    assert!(stdout.contains("Put Option Price (Black-Scholes): 5.5735"));
}

#[test]
fn test_seeded_runs_are_identical() {
    let run = || {
        mcbs()
            .args(["compare", "--seed", "7", "--paths", "5000", "--no-plot"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_environment_override() {
    let output = mcbs()
        .args(["--no-plot", "--seed", "1"])
        .env("MCBS_PATHS", "1234")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Option Pricing Comparison (1234 Simulations)"));
}

#[test]
fn test_price_rejects_straddle() {
    let output = mcbs()
        .args(["price", "--option-type", "straddle", "--paths", "100"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("straddle"));
}

#[test]
fn test_zero_paths_rejected() {
    let output = mcbs().args(["--paths", "0"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("n_paths"));
}

#[test]
fn test_missing_config_file_rejected() {
    let output = mcbs()
        .args(["--config", "no/such/mcbs.toml"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_simulate_parallel() {
    let output = mcbs()
        .args(["simulate", "--parallel", "--seed", "3", "--paths", "40000", "--no-plot"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Terminal Price Sample (40000 Simulations)"));
}
