//! Matrix decomposition and covariance utilities.
//!
//! The Cholesky factorization here is the single authoritative
//! positive-definiteness check for a correlation structure: it either
//! returns the full lower-triangular factor or a
//! [`Error::NonPositiveDefiniteMatrix`], never a partial result.

use crate::array::Array;
use crate::matrix::Matrix;
use cbm_core::{
    ensure,
    errors::{Error, Result},
    Real,
};

/// Cholesky decomposition of a symmetric positive-definite matrix.
///
/// Returns the lower-triangular factor `L` such that `A = L * Lᵀ`, computed
/// row by row without pivoting:
///
/// * `L[i][j] = (A[i][j] − Σ_{k<j} L[i][k]·L[j][k]) / L[j][j]` for `j < i`
/// * `L[i][i] = √(A[i][i] − Σ_{k<i} L[i][k]²)`
///
/// Only the lower triangle of `m` is read, so an asymmetric input is
/// factored as if its upper triangle mirrored the lower one.
///
/// # Errors
/// * [`Error::InvalidCorrelationInput`] if `m` is not square.
/// * [`Error::NonPositiveDefiniteMatrix`] if a diagonal term under the
///   square root is not strictly positive (or is NaN).
pub fn cholesky_decomposition(m: &Matrix) -> Result<Matrix> {
    ensure!(
        m.is_square(),
        InvalidCorrelationInput,
        "matrix must be square, got {}×{}",
        m.rows(),
        m.cols()
    );
    let n = m.rows();
    let mut l = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..i {
            let mut s = m[(i, j)];
            for k in 0..j {
                s -= l[(i, k)] * l[(j, k)];
            }
            l[(i, j)] = s / l[(j, j)];
        }
        let mut d = m[(i, i)];
        for k in 0..i {
            d -= l[(i, k)] * l[(i, k)];
        }
        // `!(d > 0.0)` also catches NaN.
        if !(d > 0.0) || !d.is_finite() {
            tracing::debug!(row = i, pivot = d, "cholesky factorization failed");
            return Err(Error::NonPositiveDefiniteMatrix { row: i, pivot: d });
        }
        l[(i, i)] = d.sqrt();
    }
    Ok(l)
}

/// Largest absolute entry of `L·Lᵀ − A`.
///
/// Used to check a factor produced by [`cholesky_decomposition`].
pub fn reconstruction_error(l: &Matrix, a: &Matrix) -> Result<Real> {
    let reconstructed = l * &l.transpose();
    reconstructed.max_abs_diff(a)
}

/// Build a covariance matrix from volatilities and a correlation matrix.
///
/// Given a vector of volatilities σ and a correlation matrix ρ, returns
/// the covariance matrix C where $C_{ij} = \sigma_i \, \rho_{ij} \, \sigma_j$.
pub fn get_covariance(volatilities: &Array, correlation: &Matrix) -> Result<Matrix> {
    let n = volatilities.size();
    ensure!(
        correlation.rows() == n && correlation.cols() == n,
        InvalidArgument,
        "correlation matrix must be {n}×{n}, got {}×{}",
        correlation.rows(),
        correlation.cols()
    );
    if let Some(v) = volatilities.iter().find(|v| !(**v >= 0.0)) {
        return Err(Error::InvalidArgument(format!(
            "volatilities must be non-negative, got {v}"
        )));
    }
    Ok(Matrix::from_fn(n, n, |i, j| {
        volatilities[i] * correlation[(i, j)] * volatilities[j]
    }))
}
