//! Standard normal distribution.
//!
//! Built on the `statrs` error-function routines.  Only the pieces the
//! confidence-interval code needs are exposed.

use cbm_core::{ensure, errors::Result, Real};
use statrs::function::erf::erfc_inv;
use std::f64::consts::SQRT_2;

/// The inverse standard normal CDF Φ⁻¹(p).
///
/// # Errors
/// [`cbm_core::Error::InvalidArgument`] unless `0 < p < 1`.
pub fn normal_cdf_inverse(p: Real) -> Result<Real> {
    ensure!(p > 0.0 && p < 1.0, InvalidArgument, "probability must be in (0, 1), got {p}");
    Ok(-SQRT_2 * erfc_inv(2.0 * p))
}

/// Half-width multiplier of a two-sided interval at confidence `level`.
///
/// Returns `z` such that `P(|Z| ≤ z) = level`, i.e. `Φ⁻¹((1 + level) / 2)`.
/// `level` is a fraction (0.95, not 95).
pub fn two_sided_quantile(level: Real) -> Result<Real> {
    ensure!(
        level > 0.0 && level < 1.0,
        InvalidArgument,
        "confidence level must be in (0, 1), got {level}"
    );
    normal_cdf_inverse(0.5 * (1.0 + level))
}
