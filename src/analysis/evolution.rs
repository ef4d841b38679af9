//! Confidence evolution over calendar time.
//!
//! Projects how statistical certainty and interval precision improve as
//! the test accumulates traffic, one checkpoint per day. Independent of
//! which primary method is ultimately reported: the projection uses the
//! same two-proportion model as the frequentist design, recomputed from
//! the shared formula rather than by invoking that calculator.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::params::TestParameters;
use crate::result::{ConfidenceEvolutionSeries, ConfidencePoint};
use crate::statistics::{achieved_confidence, required_sample_size, two_sided_z};

/// Daily confidence/interval-width projection calculator.
#[derive(Debug, Clone)]
pub struct ConfidenceEvolutionCalculator {
    config: EngineConfig,
}

impl ConfidenceEvolutionCalculator {
    /// Create a calculator with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Produce the full evolution series as a collected record.
    pub fn calculate(
        &self,
        params: &TestParameters,
    ) -> Result<ConfidenceEvolutionSeries, EngineError> {
        Ok(ConfidenceEvolutionSeries {
            points: self.iter(params)?.collect(),
        })
    }

    /// Produce the evolution series as a lazy iterator.
    ///
    /// The iterator owns its state and is a pure function of the inputs;
    /// calling this again restarts from day 1. Consumers may stop early
    /// without affecting the points already produced.
    pub fn iter(&self, params: &TestParameters) -> Result<EvolutionIter, EngineError> {
        self.config.validate()?;
        let rates = params.normalize()?;

        // Horizon: the frequentist design duration for these inputs,
        // capped at the configured maximum. The saturating cast plus
        // clamp keep an astronomical design from overflowing; such a
        // series just runs to the horizon.
        let designed_n = required_sample_size(
            rates.baseline,
            rates.minimum_detectable,
            params.confidence,
            self.config.power,
        )
        .ceil() as u64;
        let (_, designed_total) = super::clamped_totals(designed_n, params.variations);
        let designed_days = super::estimate_days(designed_total, params.traffic);
        let max_days = designed_days.min(self.config.max_horizon_days);

        Ok(EvolutionIter {
            day: 1,
            max_days,
            done: false,
            traffic: params.traffic,
            variations: params.variations,
            target_confidence: params.confidence,
            baseline: rates.baseline,
            minimum_detectable: rates.minimum_detectable,
            power: self.config.power,
            z_alpha: two_sided_z(params.confidence),
        })
    }
}

/// Lazy, finite iterator over daily confidence checkpoints.
///
/// Yields one [`ConfidencePoint`] per day from day 1 until the target
/// confidence is reached or the horizon runs out.
#[derive(Debug, Clone)]
pub struct EvolutionIter {
    day: u64,
    max_days: u64,
    done: bool,
    traffic: f64,
    variations: u32,
    target_confidence: f64,
    baseline: f64,
    minimum_detectable: f64,
    power: f64,
    z_alpha: f64,
}

impl Iterator for EvolutionIter {
    type Item = ConfidencePoint;

    fn next(&mut self) -> Option<ConfidencePoint> {
        if self.done || self.day > self.max_days {
            return None;
        }

        let day = self.day;
        self.day += 1;

        // Per-variation samples accumulated by this day; traffic is
        // split evenly across the arms.
        let cumulative =
            (self.traffic * day as f64 / f64::from(self.variations)).ceil() as u64;
        let n = cumulative as f64;

        let confidence_value =
            achieved_confidence(n, self.baseline, self.minimum_detectable, self.power);
        let interval_half_width =
            self.z_alpha * (self.baseline * (1.0 - self.baseline) / n).sqrt();

        if confidence_value >= self.target_confidence {
            self.done = true;
        }

        Some(ConfidencePoint {
            day,
            cumulative_sample_size: cumulative,
            confidence_value,
            interval_half_width,
        })
    }
}
