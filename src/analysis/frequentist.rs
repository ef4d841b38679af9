//! Frequentist sample-size and duration estimation.
//!
//! Power analysis on a two-proportion comparison: given the baseline
//! rate, the minimum detectable rate, and a target confidence, the
//! two-sided z-test formula yields the per-variation sample size at the
//! configured power (default 0.8). Fully deterministic.

use crate::analysis::{clamped_totals, estimate_days};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::params::TestParameters;
use crate::result::CalculationResult;
use crate::statistics::required_sample_size;

/// Two-proportion z-test duration calculator.
#[derive(Debug, Clone)]
pub struct FrequentistCalculator {
    config: EngineConfig,
}

impl FrequentistCalculator {
    /// Create a calculator with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Estimate the required sample size and test duration.
    ///
    /// A baseline rate near 0 or 1 (but not on the boundary), or a
    /// vanishing improvement, produces a very large sample size; that is
    /// a valid, if impractical, result rather than an error. Sizes that
    /// would not fit a `u64` clamp to the representable bound.
    pub fn calculate(&self, params: &TestParameters) -> Result<CalculationResult, EngineError> {
        self.config.validate()?;
        let rates = params.normalize()?;

        let n = required_sample_size(
            rates.baseline,
            rates.minimum_detectable,
            params.confidence,
            self.config.power,
        );
        // f64 → u64 casts saturate, so an astronomical n lands on
        // u64::MAX before the clamp.
        let (per_variation, total) = clamped_totals(n.ceil() as u64, params.variations);

        Ok(CalculationResult {
            required_sample_size_per_variation: per_variation,
            total_required_visits: total,
            estimated_days: estimate_days(total, params.traffic),
            baseline_rate: rates.baseline,
            minimum_detectable_rate: rates.minimum_detectable,
        })
    }
}
