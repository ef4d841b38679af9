//! Error taxonomy for the calculation engine.
//!
//! Every error here is raised synchronously from invalid or degenerate
//! input, never from transient conditions. The engine fails the whole
//! call; mapping to user-facing messages or HTTP statuses belongs to
//! the transport layer.

use thiserror::Error;

/// Errors produced by the calculation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// An input field is outside the ranges the engine accepts.
    #[error("invalid parameters: {reason}")]
    InvalidParameters {
        /// Which constraint was violated.
        reason: String,
    },

    /// The baseline rate admits no detectable effect.
    ///
    /// Raised when the baseline rate and the minimum detectable rate are
    /// numerically equal (the two-proportion denominator is zero), which
    /// includes a baseline rate of exactly 0, or when the baseline rate
    /// is exactly 1 so no lift is resolvable.
    #[error("degenerate effect size: baseline rate {baseline_rate} admits no detectable lift")]
    DegenerateEffectSize {
        /// The offending baseline conversion rate.
        baseline_rate: f64,
    },

    /// The Bayesian search hit its sample-size ceiling before the target
    /// confidence was reached.
    ///
    /// Signals that the requested improvement/confidence combination is
    /// impractical at any realistic sample size.
    #[error(
        "target confidence {confidence} unreachable within {max_sample_size} samples per variation"
    )]
    ConfidenceUnreachable {
        /// The target confidence that could not be reached.
        confidence: f64,
        /// The search ceiling that was exhausted.
        max_sample_size: u64,
    },
}

impl EngineError {
    /// Construct an `InvalidParameters` error from any message.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::invalid("confidence must be in (0, 1)");
        assert_eq!(
            err.to_string(),
            "invalid parameters: confidence must be in (0, 1)"
        );

        let err = EngineError::DegenerateEffectSize { baseline_rate: 0.0 };
        assert!(err.to_string().contains("degenerate effect size"));

        let err = EngineError::ConfidenceUnreachable {
            confidence: 0.999999,
            max_sample_size: 2_000_000,
        };
        assert!(err.to_string().contains("unreachable"));
        assert!(err.to_string().contains("2000000"));
    }

    #[test]
    fn test_errors_compare_exactly() {
        assert_eq!(
            EngineError::DegenerateEffectSize { baseline_rate: 0.0 },
            EngineError::DegenerateEffectSize { baseline_rate: 0.0 },
        );
        assert_ne!(EngineError::invalid("a"), EngineError::invalid("b"));
    }
}
