//! Statistics accumulators and sample moments.

use crate::matrix::Matrix;
use cbm_core::{ensure, errors::Result, Real};

/// Incremental statistics accumulator.
///
/// Accumulates samples and computes mean, variance, standard deviation,
/// standard error and count.  Uses Welford's update so long
/// runs of small increments do not lose precision.
#[derive(Debug, Clone)]
pub struct Statistics {
    count: usize,
    mean: Real,
    m2: Real,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Add a single sample.
    pub fn add(&mut self, x: Real) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as Real;
        self.m2 += delta * (x - self.mean);
    }

    /// Add every sample from an iterator.
    pub fn add_all<I: IntoIterator<Item = Real>>(&mut self, xs: I) {
        for x in xs {
            self.add(x);
        }
    }

    /// Number of samples.
    pub fn samples(&self) -> usize {
        self.count
    }

    /// Mean.  Returns `None` if no samples have been added.
    pub fn mean(&self) -> Option<Real> {
        (self.count > 0).then_some(self.mean)
    }

    /// Variance (unbiased, Bessel-corrected).  Returns `None` for fewer
    /// than 2 samples.
    pub fn variance(&self) -> Option<Real> {
        (self.count >= 2).then(|| self.m2 / (self.count as Real - 1.0))
    }

    /// Standard deviation.  Returns `None` for fewer than 2 samples.
    pub fn std_dev(&self) -> Option<Real> {
        self.variance().map(Real::sqrt)
    }

    /// Standard error of the mean, `σ / √n`.
    pub fn error_estimate(&self) -> Option<Real> {
        self.std_dev().map(|s| s / (self.count as Real).sqrt())
    }
}

/// Pearson correlation coefficient of two equally long samples.
///
/// Returns `None` when the samples differ in length, hold fewer than two
/// points, or either one has zero variance.
pub fn sample_correlation(x: &[Real], y: &[Real]) -> Option<Real> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let n = x.len() as Real;
    let mx = x.iter().sum::<Real>() / n;
    let my = y.iter().sum::<Real>() / n;
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y) {
        let (dx, dy) = (a - mx, b - my);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    let denom = (sxx * syy).sqrt();
    (denom > 0.0).then(|| sxy / denom)
}

/// Sample covariance between the rows of `m`.
///
/// Each row is a variable and each column one joint observation, so the
/// result is `rows × rows` with the unbiased `1 / (cols − 1)` normalisation.
///
/// # Errors
/// [`cbm_core::Error::InvalidArgument`] if `m` has fewer than two columns.
pub fn row_covariance(m: &Matrix) -> Result<Matrix> {
    let (n, obs) = m.shape();
    ensure!(
        obs >= 2,
        InvalidArgument,
        "need at least 2 observations per row, got {obs}"
    );
    let means: Vec<Real> = (0..n)
        .map(|i| (0..obs).map(|t| m[(i, t)]).sum::<Real>() / obs as Real)
        .collect();
    let mut cov = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..=i {
            let s: Real = (0..obs)
                .map(|t| (m[(i, t)] - means[i]) * (m[(j, t)] - means[j]))
                .sum();
            let c = s / (obs as Real - 1.0);
            cov[(i, j)] = c;
            cov[(j, i)] = c;
        }
    }
    Ok(cov)
}
