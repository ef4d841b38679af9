//! Output records for the calculation engine.
//!
//! Plain structured data with no engine-specific formatting; the
//! transport layer serializes these directly.

use serde::{Deserialize, Serialize};

/// Primary calculation method, selected by the boundary layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Two-proportion z-test power analysis.
    Frequentist,
    /// Beta-Binomial posterior probability of superiority.
    Bayesian,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Frequentist => write!(f, "frequentist"),
            Method::Bayesian => write!(f, "bayesian"),
        }
    }
}

/// Result of a frequentist or Bayesian duration calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Minimum sample size required in each variation.
    pub required_sample_size_per_variation: u64,
    /// Sample size across all variations,
    /// `required_sample_size_per_variation × variations`.
    pub total_required_visits: u64,
    /// Estimated calendar duration,
    /// `ceil(total_required_visits / traffic)`.
    pub estimated_days: u64,
    /// Observed control conversion rate.
    pub baseline_rate: f64,
    /// Conversion rate the test is powered to distinguish from baseline.
    pub minimum_detectable_rate: f64,
}

/// One sampling checkpoint in the confidence evolution series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidencePoint {
    /// Day number, starting at 1.
    pub day: u64,
    /// Per-variation sample size accumulated by this day.
    pub cumulative_sample_size: u64,
    /// Two-sided confidence level achievable at this sample size for the
    /// configured effect size. Non-decreasing across days.
    pub confidence_value: f64,
    /// Half-width of the normal-approximation confidence interval for
    /// the baseline proportion. Non-increasing across days.
    pub interval_half_width: f64,
}

/// Ordered, finite series of confidence evolution checkpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceEvolutionSeries {
    /// Checkpoints from day 1 to the day the target confidence (or the
    /// bounded horizon) is reached.
    pub points: Vec<ConfidencePoint>,
}

impl ConfidenceEvolutionSeries {
    /// Number of checkpoints in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no checkpoints.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The final checkpoint, if any.
    pub fn last(&self) -> Option<&ConfidencePoint> {
        self.points.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Method::Frequentist).unwrap(),
            "\"frequentist\""
        );
        assert_eq!(
            serde_json::to_string(&Method::Bayesian).unwrap(),
            "\"bayesian\""
        );
        let method: Method = serde_json::from_str("\"bayesian\"").unwrap();
        assert_eq!(method, Method::Bayesian);
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Frequentist.to_string(), "frequentist");
        assert_eq!(Method::Bayesian.to_string(), "bayesian");
    }

    #[test]
    fn test_series_accessors() {
        let series = ConfidenceEvolutionSeries {
            points: vec![ConfidencePoint {
                day: 1,
                cumulative_sample_size: 250,
                confidence_value: 0.2,
                interval_half_width: 0.05,
            }],
        };
        assert_eq!(series.len(), 1);
        assert!(!series.is_empty());
        assert_eq!(series.last().unwrap().day, 1);
    }
}
