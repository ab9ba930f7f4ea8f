//! Accuracy checks over already generated increments.
//!
//! The sampling pipeline never calls these. They run after the fact, from
//! tests or from a verbose [`simulate`](super::simulate) run.

use super::path::accumulate_paths;
use cbm_core::{
    ensure,
    errors::{Error, Result},
    Correlation, Real, Time,
};
use cbm_math::{row_covariance, sample_correlation, Matrix};

/// Simulated versus requested correlation between the first two series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationReport {
    /// Pearson correlation of the two cumulative paths.
    pub simulated: Correlation,
    /// The correlation that was asked for.
    pub requested: Correlation,
}

impl CorrelationReport {
    /// `|simulated − requested|`.
    pub fn absolute_error(&self) -> Real {
        (self.simulated - self.requested).abs()
    }

    /// Emit the report as an `info` event.
    pub fn log(&self) {
        tracing::info!(
            simulated_rho = self.simulated,
            requested_rho = self.requested,
            absolute_error = self.absolute_error(),
            "generation of brownian motions"
        );
    }
}

impl std::fmt::Display for CorrelationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Simulated rho: {}\tGiven rho: {}\nAbsolute error: {}",
            self.simulated,
            self.requested,
            self.absolute_error()
        )
    }
}

/// Compare the correlation of the cumulative-summed rows 0 and 1 of
/// `increments` against `requested`.
///
/// # Errors
/// [`Error::InvalidArgument`] if there are fewer than two series or fewer
/// than two steps, or if either path has zero variance.
pub fn correlation_report(increments: &Matrix, requested: Correlation) -> Result<CorrelationReport> {
    ensure!(
        increments.rows() >= 2 && increments.cols() >= 2,
        InvalidArgument,
        "correlation report needs at least 2 series and 2 steps, got {}×{}",
        increments.rows(),
        increments.cols()
    );
    let paths = accumulate_paths(increments);
    let simulated = sample_correlation(paths.row(0).as_slice(), paths.row(1).as_slice())
        .ok_or_else(|| Error::InvalidArgument("path has zero variance".into()))?;
    Ok(CorrelationReport {
        simulated,
        requested,
    })
}

/// Sample covariance of the increment columns, divided by `dt`.
///
/// For correctly correlated increments this estimates Σ.
pub fn empirical_covariance(increments: &Matrix, dt: Time) -> Result<Matrix> {
    ensure!(
        dt.is_finite() && dt > 0.0,
        InvalidArgument,
        "time step must be positive and finite, got {dt}"
    );
    Ok(row_covariance(increments)?.scale(1.0 / dt))
}

/// Correlation between the increments (not the paths) of two series.
///
/// Increments are independent across steps, so this estimate converges
/// much faster than the path correlation used by [`correlation_report`].
pub fn increment_correlation(increments: &Matrix, i: usize, j: usize) -> Result<Correlation> {
    let n = increments.rows();
    ensure!(
        i < n && j < n,
        InvalidArgument,
        "series index out of range: ({i}, {j}) with {n} series"
    );
    sample_correlation(increments.row(i).as_slice(), increments.row(j).as_slice())
        .ok_or_else(|| Error::InvalidArgument("increments have zero variance".into()))
}
