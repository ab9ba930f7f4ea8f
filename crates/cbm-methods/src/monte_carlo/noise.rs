//! Independent Gaussian increments.

use cbm_core::{
    ensure,
    errors::{Error, Result},
    Real, Size, Time,
};
use cbm_math::{fill_normal, Matrix};
use rand::Rng;

/// Draw a `series × steps` matrix of independent `N(0, dt)` increments.
///
/// Entries are drawn row by row (all steps of series 0, then series 1, …),
/// so the output is a pure function of the random source's state.  Zero
/// series or zero steps give an empty matrix without touching `rng`.
///
/// # Errors
/// [`Error::InvalidArgument`] if `dt` is negative or not finite, or if
/// `series × steps` overflows `usize`.
pub fn independent_increments<R: Rng + ?Sized>(
    series: Size,
    steps: Size,
    dt: Time,
    rng: &mut R,
) -> Result<Matrix> {
    ensure!(
        dt.is_finite() && dt >= 0.0,
        InvalidArgument,
        "time step must be non-negative and finite, got {dt}"
    );
    let len = series.checked_mul(steps).ok_or_else(|| {
        Error::InvalidArgument(format!("{series} series × {steps} steps overflows"))
    })?;
    let mut data: Vec<Real> = vec![0.0; len];
    fill_normal(rng, &mut data, dt.sqrt());
    Ok(Matrix::from_row_slice(series, steps, &data))
}
