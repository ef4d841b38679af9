//! Shared statistical primitives.
//!
//! Normal quantiles/CDF and the two-proportion sample-size formula used
//! by more than one calculator live here, so the calculators stay
//! independent of each other while computing with identical math.

mod normal;
mod proportions;

pub use normal::{normal_cdf, two_sided_z, z_quantile};
pub use proportions::{achieved_confidence, required_sample_size};
