//! Correlation input, its normalised matrix form, and the Cholesky factor.

use cbm_core::{
    ensure,
    errors::{Error, Result},
    Correlation, Real, Size,
};
use cbm_math::{cholesky_decomposition, get_covariance, Array, Matrix};

/// A correlation request, as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum CorrelationSpec {
    /// A single coefficient ρ ∈ (−1, 1) between two unit-variance series.
    Scalar(Correlation),
    /// An explicit `n × n` correlation or covariance matrix.
    Matrix(Matrix),
}

impl From<Correlation> for CorrelationSpec {
    fn from(rho: Correlation) -> Self {
        CorrelationSpec::Scalar(rho)
    }
}

impl From<Matrix> for CorrelationSpec {
    fn from(sigma: Matrix) -> Self {
        CorrelationSpec::Matrix(sigma)
    }
}

/// A validated, square correlation/covariance matrix.
///
/// Built once from a [`CorrelationSpec`]; every numeric stage downstream
/// works on this form only.  Squareness is guaranteed; symmetry and
/// positive-definiteness are left to [`CorrelationStructure::factorize`].
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationStructure {
    sigma: Matrix,
    requested_rho: Option<Correlation>,
}

impl CorrelationStructure {
    /// Resolve a [`CorrelationSpec`].
    ///
    /// # Errors
    /// * [`Error::InvalidCorrelationInput`] for a scalar outside (−1, 1)
    ///   (NaN included) or a non-square matrix.
    /// * [`Error::EmptyInputDimension`] for a `0 × 0` matrix.
    pub fn new(spec: CorrelationSpec) -> Result<Self> {
        match spec {
            CorrelationSpec::Scalar(rho) => Self::from_scalar(rho),
            CorrelationSpec::Matrix(sigma) => Self::from_matrix(sigma),
        }
    }

    /// The two-series structure `[[1, ρ], [ρ, 1]]`.
    pub fn from_scalar(rho: Correlation) -> Result<Self> {
        ensure!(
            rho > -1.0 && rho < 1.0,
            InvalidCorrelationInput,
            "correlation coefficient must lie strictly between -1 and 1, got {rho}"
        );
        Ok(Self {
            sigma: Matrix::from_row_slice(2, 2, &[1.0, rho, rho, 1.0]),
            requested_rho: Some(rho),
        })
    }

    /// An explicit square matrix; its dimension is the series count.
    pub fn from_matrix(sigma: Matrix) -> Result<Self> {
        ensure!(
            sigma.is_square(),
            InvalidCorrelationInput,
            "correlation matrix must be square, got {}×{}",
            sigma.rows(),
            sigma.cols()
        );
        ensure!(sigma.rows() > 0, EmptyInputDimension, "correlation matrix has no rows");
        Ok(Self {
            sigma,
            requested_rho: None,
        })
    }

    /// A matrix given as a list of rows.
    ///
    /// Ragged or non-square rows are [`Error::InvalidCorrelationInput`].
    pub fn from_rows(rows: &[Vec<Real>]) -> Result<Self> {
        let sigma =
            Matrix::from_rows(rows).map_err(|e| Error::InvalidCorrelationInput(e.to_string()))?;
        Self::from_matrix(sigma)
    }

    /// The covariance `Σ_ij = σ_i ρ_ij σ_j` built from per-series
    /// volatilities and a correlation matrix.
    ///
    /// A correlation matrix that is not `n × n` for `n` volatilities, or a
    /// negative volatility, is [`Error::InvalidCorrelationInput`].
    pub fn from_volatilities(volatilities: &Array, correlation: &Matrix) -> Result<Self> {
        let sigma = get_covariance(volatilities, correlation)
            .map_err(|e| Error::InvalidCorrelationInput(e.to_string()))?;
        Self::from_matrix(sigma)
    }

    /// Number of series to simulate.
    pub fn series_count(&self) -> Size {
        self.sigma.rows()
    }

    /// The normalised matrix Σ.
    pub fn matrix(&self) -> &Matrix {
        &self.sigma
    }

    /// The scalar ρ, when the structure was built from one.
    pub fn requested_rho(&self) -> Option<Correlation> {
        self.requested_rho
    }

    /// Correlation implied by Σ between series `i` and `j`:
    /// `Σ_ij / √(Σ_ii · Σ_jj)`.
    ///
    /// `None` if an index is out of range or a variance is not positive.
    pub fn pair_correlation(&self, i: Size, j: Size) -> Option<Correlation> {
        let n = self.series_count();
        if i >= n || j >= n {
            return None;
        }
        let denom = (self.sigma[(i, i)] * self.sigma[(j, j)]).sqrt();
        (denom > 0.0).then(|| self.sigma[(i, j)] / denom)
    }

    /// Factor Σ into its lower-triangular square root.
    ///
    /// # Errors
    /// [`Error::NonPositiveDefiniteMatrix`] if Σ is not positive-definite.
    pub fn factorize(&self) -> Result<CholeskyFactor> {
        cholesky_decomposition(&self.sigma).map(CholeskyFactor)
    }
}

impl TryFrom<CorrelationSpec> for CorrelationStructure {
    type Error = Error;

    fn try_from(spec: CorrelationSpec) -> Result<Self> {
        Self::new(spec)
    }
}

/// Lower-triangular `L` with `L·Lᵀ = Σ`.
///
/// Only obtainable from [`CorrelationStructure::factorize`] and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CholeskyFactor(Matrix);

impl CholeskyFactor {
    /// Dimension `n` of the `n × n` factor.
    pub fn dimension(&self) -> Size {
        self.0.rows()
    }

    /// The factor as a matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cbm_math::reconstruction_error;

    #[test]
    fn scalar_builds_two_by_two() {
        let s = CorrelationStructure::new(0.7.into()).unwrap();
        assert_eq!(s.series_count(), 2);
        assert_eq!(
            s.matrix(),
            &Matrix::from_row_slice(2, 2, &[1.0, 0.7, 0.7, 1.0])
        );
        assert_eq!(s.requested_rho(), Some(0.7));
    }

    #[test]
    fn scalar_out_of_range() {
        for rho in [1.2, -1.0, 1.0, -3.0, f64::NAN] {
            assert!(
                matches!(
                    CorrelationStructure::from_scalar(rho),
                    Err(Error::InvalidCorrelationInput(_))
                ),
                "rho = {rho} should be rejected"
            );
        }
    }

    #[test]
    fn matrix_must_be_square() {
        let err = CorrelationStructure::new(Matrix::zeros(2, 3).into()).unwrap_err();
        assert!(matches!(err, Error::InvalidCorrelationInput(_)));
    }

    #[test]
    fn empty_matrix_is_empty_dimension() {
        let err = CorrelationStructure::from_matrix(Matrix::zeros(0, 0)).unwrap_err();
        assert!(matches!(err, Error::EmptyInputDimension(_)));
    }

    #[test]
    fn matrix_not_checked_for_definiteness_until_factorized() {
        let s = CorrelationStructure::from_rows(&[vec![1.0, 1.5], vec![1.5, 1.0]]).unwrap();
        assert_eq!(s.series_count(), 2);
        assert!(s.requested_rho().is_none());
        assert!(s.factorize().unwrap_err().is_not_positive_definite());
    }

    #[test]
    fn from_rows_ragged_or_non_square() {
        assert!(matches!(
            CorrelationStructure::from_rows(&[vec![1.0, 0.2], vec![0.2]]),
            Err(Error::InvalidCorrelationInput(_))
        ));
        assert!(matches!(
            CorrelationStructure::from_rows(&[vec![1.0, 0.2, 0.1], vec![0.2, 1.0, 0.1]]),
            Err(Error::InvalidCorrelationInput(_))
        ));
    }

    #[test]
    fn one_by_one_structure() {
        let s = CorrelationStructure::from_rows(&[vec![4.0]]).unwrap();
        let l = s.factorize().unwrap();
        assert_eq!(l.dimension(), 1);
        assert_abs_diff_eq!(l.matrix()[(0, 0)], 2.0, epsilon = 1e-15);
    }

    #[test]
    fn from_volatilities_general_variances() {
        let vols = Array::from_slice(&[0.2, 0.3]);
        let corr = Matrix::from_row_slice(2, 2, &[1.0, -0.4, -0.4, 1.0]);
        let s = CorrelationStructure::from_volatilities(&vols, &corr).unwrap();
        assert_abs_diff_eq!(s.matrix()[(0, 0)], 0.04, epsilon = 1e-15);
        assert_abs_diff_eq!(s.matrix()[(0, 1)], -0.024, epsilon = 1e-15);
        assert_abs_diff_eq!(s.pair_correlation(0, 1).unwrap(), -0.4, epsilon = 1e-12);
        let l = s.factorize().unwrap();
        assert!(reconstruction_error(l.matrix(), s.matrix()).unwrap() < 1e-12);
    }

    #[test]
    fn pair_correlation_bounds() {
        let s = CorrelationStructure::from_scalar(0.3).unwrap();
        assert_abs_diff_eq!(s.pair_correlation(1, 0).unwrap(), 0.3, epsilon = 1e-15);
        assert!(s.pair_correlation(0, 2).is_none());
    }

    #[test]
    fn input_matrix_not_aliased() {
        let sigma = Matrix::identity(3);
        let s = CorrelationStructure::from_matrix(sigma.clone()).unwrap();
        let l = s.factorize().unwrap();
        assert_eq!(l.matrix(), &sigma);
        assert_eq!(s.matrix(), &sigma);
    }

    #[test]
    fn from_volatilities_mismatch_is_correlation_input() {
        let corr = Matrix::from_row_slice(2, 2, &[1.0, 0.5, 0.5, 1.0]);
        for vols in [
            Array::from_slice(&[0.2, 0.3, 0.4]),
            Array::from_slice(&[0.2, -0.3]),
        ] {
            assert!(matches!(
                CorrelationStructure::from_volatilities(&vols, &corr),
                Err(Error::InvalidCorrelationInput(_))
            ));
        }
        let non_square = Matrix::zeros(2, 3);
        assert!(matches!(
            CorrelationStructure::from_volatilities(&Array::from_slice(&[0.2, 0.3]), &non_square),
            Err(Error::InvalidCorrelationInput(_))
        ));
    }
}
