//! # abtest-engine
//!
//! Estimate how long an A/B test must run, and how confident its result
//! is, from observed baseline traffic and a target improvement.
//!
//! Three calculators share a six-field input contract:
//!
//! - [`FrequentistCalculator`]: required sample size and duration via
//!   two-proportion power analysis.
//! - [`BayesianCalculator`]: required sample size and duration via
//!   seeded Monte Carlo over Beta-Binomial posteriors.
//! - [`ConfidenceEvolutionCalculator`]: a day-by-day series of achieved
//!   confidence and interval width as traffic accumulates.
//!
//! The engine is a pure, stateless function of its inputs: no
//! persistence, no I/O, no logging. Transport concerns (HTTP, schema
//! validation, status mapping) belong to the caller.
//!
//! ## Quick start
//!
//! ```
//! use abtest_engine::{calculate, EngineConfig, Method, TestParameters};
//!
//! let params = TestParameters {
//!     visits: 1000,
//!     conversions: 100,
//!     traffic: 500.0,
//!     variations: 2,
//!     improvement: 0.10,
//!     confidence: 0.95,
//! };
//!
//! let result = calculate(Method::Frequentist, &params, &EngineConfig::default())?;
//! println!(
//!     "{} visitors per variation over ~{} days",
//!     result.required_sample_size_per_variation, result.estimated_days
//! );
//! # Ok::<(), abtest_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod params;
mod result;

pub mod analysis;
pub mod statistics;

pub use analysis::{
    calculate, BayesianCalculator, ConfidenceEvolutionCalculator, EvolutionIter,
    FrequentistCalculator,
};
pub use config::EngineConfig;
pub use error::EngineError;
pub use params::{Rates, TestParameters};
pub use result::{CalculationResult, ConfidenceEvolutionSeries, ConfidencePoint, Method};
