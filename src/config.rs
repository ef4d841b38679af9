//! Configuration for the calculation engine.
//!
//! The statistical constants the original design left implicit (power,
//! Monte Carlo draw count, search schedule) are carried here as
//! documented, configurable defaults rather than magic numbers.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Engine-wide configuration shared by all three calculators.
///
/// Every field has a stated default; `EngineConfig::default()` is the
/// recommended production configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Statistical power of the frequentist design.
    ///
    /// Probability of detecting a true effect of the specified size.
    /// Also drives the achieved-confidence inversion in the evolution
    /// series. Default: 0.8.
    pub power: f64,

    /// Number of paired Monte Carlo draws per Bayesian candidate.
    ///
    /// More draws tighten the probability-of-superiority estimate at
    /// linear cost. Default: 10,000.
    pub monte_carlo_draws: usize,

    /// Base seed for Monte Carlo sampling.
    ///
    /// Identical inputs always yield identical outputs; this seed is
    /// the only source of randomness in the engine. Default: 42.
    pub seed: u64,

    /// First candidate sample size for the Bayesian search.
    ///
    /// Default: 100.
    pub bayes_initial_n: u64,

    /// Geometric growth factor between Bayesian candidates.
    ///
    /// Must be > 1 so the search terminates. Default: 1.25.
    pub bayes_growth: f64,

    /// Hard ceiling on the Bayesian sample-size search.
    ///
    /// Exhausting the ceiling without reaching the target confidence
    /// fails the call with `ConfidenceUnreachable`. Default: 2,000,000.
    pub bayes_max_n: u64,

    /// Maximum number of days in the confidence evolution series.
    ///
    /// The series stops at this horizon even if the frequentist design
    /// calls for a longer test. Default: 365.
    pub max_horizon_days: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            power: 0.8,
            monte_carlo_draws: 10_000,
            seed: 42,
            bayes_initial_n: 100,
            bayes_growth: 1.25,
            bayes_max_n: 2_000_000,
            max_horizon_days: 365,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a quick configuration for development and smoke tests.
    ///
    /// Uses fewer Monte Carlo draws and a lower search ceiling:
    /// - 2,000 draws per candidate
    /// - 500,000 sample ceiling
    /// - 90 day horizon
    pub fn quick() -> Self {
        Self {
            monte_carlo_draws: 2_000,
            bayes_max_n: 500_000,
            max_horizon_days: 90,
            ..Default::default()
        }
    }

    /// Create a thorough configuration for detailed analysis.
    ///
    /// Uses generous limits for tight probability estimates:
    /// - 50,000 draws per candidate
    /// - finer search schedule (×1.1 growth)
    /// - 10,000,000 sample ceiling
    pub fn thorough() -> Self {
        Self {
            monte_carlo_draws: 50_000,
            bayes_growth: 1.1,
            bayes_max_n: 10_000_000,
            ..Default::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the frequentist power.
    pub fn power(mut self, power: f64) -> Self {
        assert!(power > 0.0 && power < 1.0, "power must be in (0, 1)");
        self.power = power;
        self
    }

    /// Set the Monte Carlo draw count.
    pub fn monte_carlo_draws(mut self, draws: usize) -> Self {
        assert!(draws > 0, "monte_carlo_draws must be positive");
        self.monte_carlo_draws = draws;
        self
    }

    /// Set the Monte Carlo base seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the first Bayesian candidate sample size.
    pub fn bayes_initial_n(mut self, n: u64) -> Self {
        assert!(n > 0, "bayes_initial_n must be positive");
        self.bayes_initial_n = n;
        self
    }

    /// Set the geometric growth factor of the Bayesian search.
    pub fn bayes_growth(mut self, growth: f64) -> Self {
        assert!(growth > 1.0, "bayes_growth must be > 1");
        self.bayes_growth = growth;
        self
    }

    /// Set the Bayesian search ceiling.
    pub fn bayes_max_n(mut self, max: u64) -> Self {
        assert!(max > 0, "bayes_max_n must be positive");
        self.bayes_max_n = max;
        self
    }

    /// Set the evolution series horizon in days.
    pub fn max_horizon_days(mut self, days: u64) -> Self {
        assert!(days > 0, "max_horizon_days must be positive");
        self.max_horizon_days = days;
        self
    }

    /// Check that the configuration is internally consistent.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.power > 0.0 && self.power < 1.0) {
            return Err(EngineError::invalid("power must be in (0, 1)"));
        }
        if self.monte_carlo_draws == 0 {
            return Err(EngineError::invalid("monte_carlo_draws must be positive"));
        }
        if self.bayes_initial_n == 0 {
            return Err(EngineError::invalid("bayes_initial_n must be positive"));
        }
        if !self.bayes_growth.is_finite() || self.bayes_growth <= 1.0 {
            return Err(EngineError::invalid("bayes_growth must be finite and > 1"));
        }
        if self.bayes_max_n < self.bayes_initial_n {
            return Err(EngineError::invalid(
                "bayes_max_n must be >= bayes_initial_n",
            ));
        }
        if self.max_horizon_days == 0 {
            return Err(EngineError::invalid("max_horizon_days must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.power, 0.8);
        assert_eq!(config.monte_carlo_draws, 10_000);
        assert_eq!(config.seed, 42);
        assert_eq!(config.bayes_initial_n, 100);
        assert_eq!(config.bayes_growth, 1.25);
        assert_eq!(config.bayes_max_n, 2_000_000);
        assert_eq!(config.max_horizon_days, 365);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_configs() {
        let quick = EngineConfig::quick();
        assert_eq!(quick.monte_carlo_draws, 2_000);
        assert_eq!(quick.bayes_max_n, 500_000);
        assert!(quick.validate().is_ok());

        let thorough = EngineConfig::thorough();
        assert_eq!(thorough.monte_carlo_draws, 50_000);
        assert_eq!(thorough.bayes_max_n, 10_000_000);
        assert!(thorough.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = EngineConfig::new()
            .power(0.9)
            .monte_carlo_draws(5_000)
            .seed(7)
            .bayes_growth(1.5)
            .max_horizon_days(30);

        assert_eq!(config.power, 0.9);
        assert_eq!(config.monte_carlo_draws, 5_000);
        assert_eq!(config.seed, 7);
        assert_eq!(config.bayes_growth, 1.5);
        assert_eq!(config.max_horizon_days, 30);
    }

    #[test]
    fn test_validation_rejects_inconsistent_schedule() {
        let mut config = EngineConfig::default();
        config.bayes_max_n = 10;
        config.bayes_initial_n = 100;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.bayes_growth = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[should_panic]
    fn test_invalid_power_panics() {
        EngineConfig::new().power(1.5);
    }

    #[test]
    #[should_panic]
    fn test_invalid_growth_panics() {
        EngineConfig::new().bayes_growth(0.9);
    }
}
