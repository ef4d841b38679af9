//! Bayesian sample-size estimation via posterior probability of
//! superiority.
//!
//! ## Model
//!
//! Both arms carry Beta(1,1) uninformative priors. At a candidate
//! per-variation sample size `n`, the posteriors are
//!
//! ```text
//! control   ~ Beta(1 + n·p₁, 1 + n·(1 − p₁))
//! variation ~ Beta(1 + n·p₂, 1 + n·(1 − p₂))
//! ```
//!
//! with expected fractional pseudo-counts at the observed baseline rate
//! `p₁` and the minimum detectable rate `p₂`. `P(variation > control)`
//! is estimated as the fraction of paired Monte Carlo draws where the
//! variation sample exceeds the control sample.
//!
//! ## Search
//!
//! Candidates follow a geometric schedule up to a hard ceiling; the
//! smallest candidate whose superiority probability reaches the target
//! confidence wins. Exhausting the ceiling fails the call with
//! `ConfidenceUnreachable` rather than looping unboundedly.
//!
//! ## Determinism
//!
//! Each candidate is evaluated with a `Xoshiro256PlusPlus` generator
//! seeded from the configured base seed mixed with `n`, so identical
//! inputs always yield identical outputs and the estimate at a given
//! candidate does not depend on its position in the schedule.

use rand::SeedableRng;
use rand_distr::{Beta, Distribution};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::analysis::estimate_days;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::params::{Rates, TestParameters};
use crate::result::CalculationResult;

// Odd 64-bit multiplier (splitmix64 increment) for per-candidate seed mixing.
const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Beta-Binomial probability-of-superiority duration calculator.
#[derive(Debug, Clone)]
pub struct BayesianCalculator {
    config: EngineConfig,
}

impl BayesianCalculator {
    /// Create a calculator with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Estimate the sample size at which the posterior probability that
    /// the variation beats the control reaches the target confidence.
    pub fn calculate(&self, params: &TestParameters) -> Result<CalculationResult, EngineError> {
        self.config.validate()?;
        let rates = params.normalize()?;

        let per_variation = self.search_sample_size(&rates, params.confidence)?;
        let total = per_variation * u64::from(params.variations);

        Ok(CalculationResult {
            required_sample_size_per_variation: per_variation,
            total_required_visits: total,
            estimated_days: estimate_days(total, params.traffic),
            baseline_rate: rates.baseline,
            minimum_detectable_rate: rates.minimum_detectable,
        })
    }

    /// Walk the geometric candidate schedule and return the smallest
    /// candidate reaching the target confidence.
    fn search_sample_size(&self, rates: &Rates, confidence: f64) -> Result<u64, EngineError> {
        let mut n = self.config.bayes_initial_n.min(self.config.bayes_max_n);

        loop {
            if self.superiority_probability(n, rates) >= confidence {
                return Ok(n);
            }
            if n >= self.config.bayes_max_n {
                return Err(EngineError::ConfidenceUnreachable {
                    confidence,
                    max_sample_size: self.config.bayes_max_n,
                });
            }
            // Grow geometrically, always advancing, clamped to the
            // ceiling so it is evaluated as the final candidate.
            let next = ((n as f64) * self.config.bayes_growth).ceil() as u64;
            n = next.max(n + 1).min(self.config.bayes_max_n);
        }
    }

    /// Monte Carlo estimate of `P(variation > control)` at sample size `n`.
    fn superiority_probability(&self, n: u64, rates: &Rates) -> f64 {
        let mut rng =
            Xoshiro256PlusPlus::seed_from_u64(self.config.seed ^ n.wrapping_mul(SEED_MIX));

        let n = n as f64;
        // Pseudo-counts are >= 1 because both rates are in (0, 1).
        let control = Beta::new(1.0 + n * rates.baseline, 1.0 + n * (1.0 - rates.baseline))
            .expect("control posterior parameters are positive");
        let variation = Beta::new(
            1.0 + n * rates.minimum_detectable,
            1.0 + n * (1.0 - rates.minimum_detectable),
        )
        .expect("variation posterior parameters are positive");

        let draws = self.config.monte_carlo_draws;
        let mut wins = 0usize;
        for _ in 0..draws {
            if variation.sample(&mut rng) > control.sample(&mut rng) {
                wins += 1;
            }
        }

        wins as f64 / draws as f64
    }
}
