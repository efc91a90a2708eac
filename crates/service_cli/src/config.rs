//! Scenario configuration management.
//!
//! Handles loading of the pricing scenario from TOML files with environment
//! variable and command-line override support. Precedence, lowest first:
//! built-in defaults, TOML file, `MCBS_*` environment variables, CLI flags.

use std::path::{Path, PathBuf};

use pricer_core::types::{MarketParams, PricingError};
use pricer_pricing::mc::{MonteCarloConfig, MAX_PATHS};
use serde::Deserialize;
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "mcbs.toml";

/// Scenario configuration
///
/// Defaults reproduce the reference scenario: S0=100, K=100, T=1, r=5%,
/// σ=20%, 100,000 paths, 50 histogram bins.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Spot price S0
    pub spot: f64,
    /// Strike price K
    pub strike: f64,
    /// Maturity T in years
    pub maturity: f64,
    /// Risk-free rate r
    pub rate: f64,
    /// Volatility σ
    pub volatility: f64,
    /// Number of Monte Carlo paths
    pub n_paths: usize,
    /// Generator seed; absent means system entropy
    pub seed: Option<u64>,
    /// Sample across the rayon thread pool
    pub parallel: bool,
    /// Histogram bins
    pub bins: usize,
    /// Chart width in terminal columns
    pub chart_width: u16,
    /// Chart height in terminal rows
    pub chart_height: u16,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
            n_paths: 100_000,
            seed: None,
            parallel: false,
            bins: 50,
            chart_width: 100,
            chart_height: 30,
        }
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Env { var, value })
}

impl ScenarioConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load an explicit file, or [`DEFAULT_CONFIG_PATH`] if it exists, or defaults.
    ///
    /// An explicitly requested file must exist; the default file is optional.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply `MCBS_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Recognised variables: `MCBS_SPOT`, `MCBS_STRIKE`, `MCBS_MATURITY`,
    /// `MCBS_RATE`, `MCBS_VOLATILITY`, `MCBS_PATHS`, `MCBS_SEED`.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("MCBS_SPOT") {
            self.spot = parse_env("MCBS_SPOT", value)?;
        }
        if let Some(value) = lookup("MCBS_STRIKE") {
            self.strike = parse_env("MCBS_STRIKE", value)?;
        }
        if let Some(value) = lookup("MCBS_MATURITY") {
            self.maturity = parse_env("MCBS_MATURITY", value)?;
        }
        if let Some(value) = lookup("MCBS_RATE") {
            self.rate = parse_env("MCBS_RATE", value)?;
        }
        if let Some(value) = lookup("MCBS_VOLATILITY") {
            self.volatility = parse_env("MCBS_VOLATILITY", value)?;
        }
        if let Some(value) = lookup("MCBS_PATHS") {
            self.n_paths = parse_env("MCBS_PATHS", value)?;
        }
        if let Some(value) = lookup("MCBS_SEED") {
            self.seed = Some(parse_env("MCBS_SEED", value)?);
        }

        Ok(self)
    }

    /// Apply command-line overrides
    pub fn with_cli_override(
        mut self,
        seed: Option<u64>,
        n_paths: Option<usize>,
        parallel: bool,
    ) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(n_paths) = n_paths {
            self.n_paths = n_paths;
        }
        self.parallel |= parallel;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        for (name, value) in [
            ("spot", self.spot),
            ("strike", self.strike),
            ("maturity", self.maturity),
            ("volatility", self.volatility),
        ] {
            if !(value.is_finite() && value > 0.0) {
                errors.push(format!("{} must be positive and finite, got {}", name, value));
            }
        }

        if !self.rate.is_finite() {
            errors.push(format!("rate must be finite, got {}", self.rate));
        }

        if self.n_paths == 0 {
            errors.push("n_paths must be greater than 0".to_string());
        }
        if self.n_paths > MAX_PATHS {
            errors.push(format!(
                "n_paths {} exceeds maximum allowed ({})",
                self.n_paths, MAX_PATHS
            ));
        }

        if self.bins == 0 {
            errors.push("bins must be greater than 0".to_string());
        }

        if self.chart_width < 40 || self.chart_height < 12 {
            errors.push(format!(
                "chart size {}x{} is too small (minimum 40x12)",
                self.chart_width, self.chart_height
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults), apply environment and CLI overrides, validate
    pub fn resolve(
        path: Option<&Path>,
        seed: Option<u64>,
        n_paths: Option<usize>,
        parallel: bool,
    ) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?
            .with_env_override()?
            .with_cli_override(seed, n_paths, parallel);
        config.validate()?;
        Ok(config)
    }

    /// Validated market parameters for this scenario
    pub fn market_params(&self) -> Result<MarketParams, PricingError> {
        MarketParams::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
        )
    }

    /// Monte Carlo engine configuration for this scenario
    pub fn monte_carlo_config(&self) -> Result<MonteCarloConfig, pricer_pricing::mc::ConfigError> {
        MonteCarloConfig::builder()
            .n_paths(self.n_paths)
            .maybe_seed(self.seed)
            .parallel(self.parallel)
            .build()
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("cannot read {}: {message}", .path.display())]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying IO error message
        message: String,
    },
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Environment variable with an unparsable value
    #[error("Invalid value '{value}' for environment variable {var}")]
    Env {
        /// Variable name
        var: &'static str,
        /// Raw value
        value: String,
    },
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
