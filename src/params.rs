//! Test parameter input model and shared normalization.
//!
//! `TestParameters` is the six-field input contract shared by all three
//! calculators. `normalize` validates ranges and derives the baseline
//! and minimum detectable conversion rates used everywhere downstream.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Input parameters for a duration/confidence calculation.
///
/// Immutable per call; the transport layer owns schema validation and
/// delivers already-typed numeric values. Range validation happens in
/// [`TestParameters::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestParameters {
    /// Observed baseline (control) visitor count.
    pub visits: u64,
    /// Observed baseline conversions; must not exceed `visits`.
    pub conversions: u64,
    /// Expected visitors per day across the whole test.
    pub traffic: f64,
    /// Total number of arms including control; at least 2.
    pub variations: u32,
    /// Minimum relative improvement to detect (0.10 = 10% relative lift).
    pub improvement: f64,
    /// Target statistical confidence level, in (0, 1).
    pub confidence: f64,
}

/// Derived conversion rates, computed once per call and reused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    /// Observed control conversion rate, `conversions / visits`.
    pub baseline: f64,
    /// Rate the test is powered to distinguish from baseline,
    /// `baseline × (1 + improvement)`.
    pub minimum_detectable: f64,
}

impl TestParameters {
    /// Validate ranges and derive the baseline and minimum detectable rates.
    ///
    /// Fails with [`EngineError::InvalidParameters`] when any field is out
    /// of range, or when the implied minimum detectable rate reaches 1.0
    /// or above. Fails with [`EngineError::DegenerateEffectSize`] when the
    /// two rates coincide (which includes `conversions == 0`) or the
    /// baseline rate is exactly 1; on either boundary there is no
    /// resolvable lift.
    pub fn normalize(&self) -> Result<Rates, EngineError> {
        self.validate()?;

        let baseline = self.conversions as f64 / self.visits as f64;
        let minimum_detectable = baseline * (1.0 + self.improvement);

        if baseline >= 1.0 || minimum_detectable == baseline {
            return Err(EngineError::DegenerateEffectSize {
                baseline_rate: baseline,
            });
        }
        if minimum_detectable >= 1.0 {
            return Err(EngineError::invalid(format!(
                "improvement of {} pushes the detectable rate to {:.4}, which is not a valid proportion",
                self.improvement, minimum_detectable
            )));
        }

        Ok(Rates {
            baseline,
            minimum_detectable,
        })
    }

    /// Check field ranges without deriving rates.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.visits == 0 {
            return Err(EngineError::invalid("visits must be positive"));
        }
        if self.conversions > self.visits {
            return Err(EngineError::invalid(format!(
                "conversions ({}) must not exceed visits ({})",
                self.conversions, self.visits
            )));
        }
        if !self.traffic.is_finite() || self.traffic <= 0.0 {
            return Err(EngineError::invalid("traffic must be positive and finite"));
        }
        if self.variations < 2 {
            return Err(EngineError::invalid(
                "variations must be at least 2 (including control)",
            ));
        }
        if !self.improvement.is_finite() || self.improvement <= 0.0 {
            return Err(EngineError::invalid(
                "improvement must be positive and finite",
            ));
        }
        if !self.confidence.is_finite() || self.confidence <= 0.0 || self.confidence >= 1.0 {
            return Err(EngineError::invalid("confidence must be in (0, 1)"));
        }
        Ok(())
    }
}
