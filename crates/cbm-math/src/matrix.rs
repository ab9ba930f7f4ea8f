//! `Matrix`: a two-dimensional matrix of reals.
//!
//! This is a thin newtype around `nalgebra::DMatrix<f64>`.  Correlation
//! matrices, Cholesky factors, and `series × steps` increment and path
//! matrices are all carried in it.

use crate::array::Array;
use cbm_core::{
    ensure,
    errors::{Error, Result},
    Real,
};
use nalgebra::DMatrix;
use std::ops::{Index, IndexMut, Mul};

/// A dynamically-sized 2D matrix of `Real` values (row-major access).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Create an identity matrix of size `n × n`.
    pub fn identity(n: usize) -> Self {
        Self(DMatrix::identity(n, n))
    }

    /// Create from a row-major data slice.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[Real]) -> Self {
        Self(DMatrix::from_row_slice(rows, cols, data))
    }

    /// Create from a list of rows.
    ///
    /// Every row must have the same length; ragged input is
    /// [`Error::InvalidArgument`].  An empty list yields a `0 × 0` matrix.
    pub fn from_rows(rows: &[Vec<Real>]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some((i, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(Error::InvalidArgument(format!(
                "row {i} has {} elements, expected {n_cols}",
                r.len()
            )));
        }
        Ok(Self(DMatrix::from_fn(n_rows, n_cols, |i, j| rows[i][j])))
    }

    /// Create a matrix whose element `(i, j)` is `f(i, j)`.
    pub fn from_fn<F: FnMut(usize, usize) -> Real>(rows: usize, cols: usize, f: F) -> Self {
        Self(DMatrix::from_fn(rows, cols, f))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.0.shape()
    }

    /// Return `true` if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.0.nrows() == self.0.ncols()
    }

    /// Return `true` if the matrix has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return `true` if every element above the diagonal is exactly zero.
    pub fn is_lower_triangular(&self) -> bool {
        (0..self.rows()).all(|i| ((i + 1)..self.cols()).all(|j| self.0[(i, j)] == 0.0))
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Extract a row as an `Array`.
    pub fn row(&self, i: usize) -> Array {
        let data: Vec<Real> = self.0.row(i).iter().copied().collect();
        Array::from_vec(data)
    }

    /// Extract a column as an `Array`.
    pub fn column(&self, j: usize) -> Array {
        let data: Vec<Real> = self.0.column(j).iter().copied().collect();
        Array::from_vec(data)
    }

    /// Largest absolute element-wise difference with `other`.
    ///
    /// Shapes must agree; otherwise [`Error::InvalidArgument`].
    pub fn max_abs_diff(&self, other: &Matrix) -> Result<Real> {
        ensure!(
            self.shape() == other.shape(),
            InvalidArgument,
            "shape mismatch: {:?} vs {:?}",
            self.shape(),
            other.shape()
        );
        Ok(self
            .0
            .iter()
            .zip(other.0.iter())
            .fold(0.0, |acc: Real, (a, b)| acc.max((a - b).abs())))
    }

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: Real) -> Self {
        Self(&self.0 * scalar)
    }

    /// Iterator over elements in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.0.iter()
    }
}

// ── Indexing ──────────────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = Real;
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        &self.0[(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Real {
        &mut self.0[(i, j)]
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────────

impl Mul for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        Matrix(&self.0 * &rhs.0)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.0.nrows() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..self.0.ncols() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.0[(i, j)])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_row_major() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.row(1).as_slice(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn from_rows_ragged_rejected() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn from_rows_empty() {
        let m = Matrix::from_rows(&[]).unwrap();
        assert!(m.is_empty());
        assert!(m.is_square());
    }

    #[test]
    fn multiply() {
        let a = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::from_row_slice(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        let c = &a * &b;
        assert_eq!(c[(0, 0)], 19.0);
        assert_eq!(c[(0, 1)], 22.0);
        assert_eq!(c[(1, 0)], 43.0);
        assert_eq!(c[(1, 1)], 50.0);
    }

    #[test]
    fn lower_triangular() {
        let l = Matrix::from_row_slice(2, 2, &[2.0, 0.0, 1.0, 3.0]);
        assert!(l.is_lower_triangular());
        assert!(!l.transpose().is_lower_triangular());
    }

    #[test]
    fn max_abs_diff_and_shape_check() {
        let a = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::from_row_slice(2, 2, &[1.0, 2.5, 3.0, 3.0]);
        assert!((a.max_abs_diff(&b).unwrap() - 1.0).abs() < 1e-15);
        assert!(a.max_abs_diff(&Matrix::zeros(1, 2)).is_err());
    }

    #[test]
    fn row_and_column() {
        let m = Matrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.row(1).as_slice(), &[4.0, 5.0, 6.0]);
        assert_eq!(m.column(2).as_slice(), &[3.0, 6.0]);
    }
}
