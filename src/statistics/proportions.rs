//! Two-proportion z-test design math.
//!
//! The forward direction (sample size for a target confidence at fixed
//! power) drives the frequentist calculator; the inverse direction
//! (confidence achievable at a fixed sample size) drives the confidence
//! evolution series. Both work on the same model:
//!
//! ```text
//! n = (z_(1-α/2) + z_power)² · (p₁(1-p₁) + p₂(1-p₂)) / (p₁ - p₂)²
//! ```

use super::normal::{normal_cdf, two_sided_z, z_quantile};

/// Per-variation sample size to detect `p2` vs `p1` at the given
/// confidence and power.
///
/// Returns an unrounded value; callers take the ceiling. Callers
/// guarantee `p1 != p2` (degenerate inputs are rejected upstream).
pub fn required_sample_size(p1: f64, p2: f64, confidence: f64, power: f64) -> f64 {
    let z_alpha = two_sided_z(confidence);
    let z_power = z_quantile(power);

    let variance_sum = p1 * (1.0 - p1) + p2 * (1.0 - p2);
    let effect = p2 - p1;

    (z_alpha + z_power).powi(2) * variance_sum / (effect * effect)
}

/// Two-sided confidence level achievable with `n` samples per variation
/// for the effect `p2 - p1`, at the given power.
///
/// This is the sample-size formula solved the other way:
/// `z_achieved = sqrt(n · Δ² / S) − z_power`, mapped through the normal
/// CDF as a two-sided level and clamped to `[0, 1)`. Monotonically
/// non-decreasing in `n`.
pub fn achieved_confidence(n: f64, p1: f64, p2: f64, power: f64) -> f64 {
    let variance_sum = p1 * (1.0 - p1) + p2 * (1.0 - p2);
    let effect = p2 - p1;

    let z_achieved = (n * effect * effect / variance_sum).sqrt() - z_quantile(power);
    if z_achieved <= 0.0 {
        return 0.0;
    }

    (2.0 * normal_cdf(z_achieved) - 1.0).clamp(0.0, 1.0)
}
