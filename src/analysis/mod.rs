//! The three calculators: frequentist, Bayesian, confidence evolution.
//!
//! Each calculator consumes the same `TestParameters` input and is
//! invoked independently; none calls another. The frequentist and
//! Bayesian calculators share the `TestParameters → CalculationResult`
//! contract and are selected by the boundary layer via [`Method`].

mod bayesian;
mod evolution;
mod frequentist;

pub use bayesian::BayesianCalculator;
pub use evolution::{ConfidenceEvolutionCalculator, EvolutionIter};
pub use frequentist::FrequentistCalculator;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::params::TestParameters;
use crate::result::{CalculationResult, Method};

/// Run the primary calculation selected by `method`.
///
/// Dispatch point for the boundary layer's tagged method selection over
/// the two capability-equivalent calculators.
pub fn calculate(
    method: Method,
    params: &TestParameters,
    config: &EngineConfig,
) -> Result<CalculationResult, EngineError> {
    match method {
        Method::Frequentist => FrequentistCalculator::new(config.clone()).calculate(params),
        Method::Bayesian => BayesianCalculator::new(config.clone()).calculate(params),
    }
}

/// Calendar days needed to accumulate `total_visits` at `traffic`
/// visitors per day, rounded up and never zero.
pub(crate) fn estimate_days(total_visits: u64, traffic: f64) -> u64 {
    (total_visits as f64 / traffic).ceil().max(1.0) as u64
}

/// Per-variation size and exact total, clamped so the total cannot
/// overflow.
///
/// Extreme designs (a near-boundary rate or a vanishing effect) are
/// valid, impractical results; the size clamps to the largest value
/// whose total is representable, keeping
/// `total = per_variation × variations` exact.
pub(crate) fn clamped_totals(per_variation: u64, variations: u32) -> (u64, u64) {
    let arms = u64::from(variations);
    let per = per_variation.clamp(1, u64::MAX / arms);
    (per, per * arms)
}
