//! Mixing independent increments into correlated ones.

use super::correlation::CholeskyFactor;
use cbm_core::{ensure, errors::Result};
use cbm_math::Matrix;

/// Correlate independent increments: `CX = L · X`.
///
/// Row `i` of the result is the combination of the rows of `x` weighted by
/// row `i` of `L`.  If the columns of `x` are i.i.d. `N(0, dT·I)`, the
/// columns of the result are `N(0, dT·Σ)`.
///
/// # Errors
/// [`cbm_core::Error::InvalidArgument`] if the factor dimension differs from the
/// number of rows of `x`.
pub fn apply_correlation(factor: &CholeskyFactor, x: &Matrix) -> Result<Matrix> {
    ensure!(
        factor.dimension() == x.rows(),
        InvalidArgument,
        "cholesky factor is {n}×{n} but increments have {} rows",
        x.rows(),
        n = factor.dimension()
    );
    Ok(factor.matrix() * x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monte_carlo::correlation::CorrelationStructure;
    use crate::monte_carlo::noise::independent_increments;
    use approx::assert_abs_diff_eq;
    use cbm_math::{row_covariance, seeded_rng};

    #[test]
    fn identity_factor_is_noop() {
        let l = CorrelationStructure::from_matrix(Matrix::identity(3))
            .unwrap()
            .factorize()
            .unwrap();
        let x = independent_increments(3, 10, 0.1, &mut seeded_rng(4)).unwrap();
        assert_eq!(apply_correlation(&l, &x).unwrap(), x);
    }

    #[test]
    fn rows_are_weighted_combinations() {
        let l = CorrelationStructure::from_scalar(0.6)
            .unwrap()
            .factorize()
            .unwrap();
        let x = Matrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, -1.0, 0.0, 1.0]);
        let cx = apply_correlation(&l, &x).unwrap();
        assert_eq!(cx.shape(), (2, 3));
        // First row is untouched: L[0] = [1, 0].
        assert_eq!(cx.row(0), x.row(0));
        // Second row: 0.6 * x0 + 0.8 * x1.
        for t in 0..3 {
            assert_abs_diff_eq!(cx[(1, t)], 0.6 * x[(0, t)] + 0.8 * x[(1, t)], epsilon = 1e-12);
        }
    }

    #[test]
    fn dimension_mismatch() {
        let l = CorrelationStructure::from_scalar(0.1)
            .unwrap()
            .factorize()
            .unwrap();
        assert!(apply_correlation(&l, &Matrix::zeros(3, 4)).is_err());
    }

    #[test]
    fn empty_steps_pass_through() {
        let l = CorrelationStructure::from_scalar(0.1)
            .unwrap()
            .factorize()
            .unwrap();
        let cx = apply_correlation(&l, &Matrix::zeros(2, 0)).unwrap();
        assert_eq!(cx.shape(), (2, 0));
    }

    #[test]
    fn column_covariance_converges_to_sigma_dt() {
        let sigma = Matrix::from_row_slice(
            3,
            3,
            &[1.0, 0.5, -0.3, 0.5, 2.0, 0.2, -0.3, 0.2, 0.5],
        );
        let l = CorrelationStructure::from_matrix(sigma.clone())
            .unwrap()
            .factorize()
            .unwrap();
        let steps = 100_000;
        let dt = 1.0 / steps as f64;
        let x = independent_increments(3, steps, dt, &mut seeded_rng(2024)).unwrap();
        let cx = apply_correlation(&l, &x).unwrap();
        let cov = row_covariance(&cx).unwrap().scale(1.0 / dt);
        assert!(
            cov.max_abs_diff(&sigma).unwrap() < 0.05,
            "empirical Σ:\n{cov}"
        );
    }
}
