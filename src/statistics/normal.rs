//! Standard normal quantiles and CDF.

use statrs::distribution::{ContinuousCDF, Normal};

/// Standard normal CDF, Φ(x).
pub fn normal_cdf(x: f64) -> f64 {
    // Unit normal construction cannot fail.
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal quantile, Φ⁻¹(p).
///
/// `p` must be in (0, 1); callers validate confidence and power levels
/// before reaching this function.
pub fn z_quantile(p: f64) -> f64 {
    debug_assert!(p > 0.0 && p < 1.0, "quantile argument must be in (0, 1)");
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.inverse_cdf(p)
}

/// Two-sided critical value for a confidence level, z_(1-α/2).
///
/// For `confidence` = 0.95 this is ≈ 1.96.
pub fn two_sided_z(confidence: f64) -> f64 {
    let alpha = 1.0 - confidence;
    z_quantile(1.0 - alpha / 2.0)
}
