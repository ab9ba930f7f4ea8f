//! `Array`: a one-dimensional vector of reals.
//!
//! Thin newtype around `nalgebra::DVector<f64>`.  Used for single series
//! (one row of an increment or path matrix) and for vectors of volatilities.

use nalgebra::DVector;
use cbm_core::Real;
use std::ops::Index;

/// A dynamically-sized 1D vector of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Array(DVector<Real>);

impl Array {
    /// Create an array from a slice.
    pub fn from_slice(data: &[Real]) -> Self {
        Self(DVector::from_column_slice(data))
    }

    /// Create an array from a `Vec`.
    pub fn from_vec(data: Vec<Real>) -> Self {
        Self(DVector::from_vec(data))
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the elements as a slice.
    pub fn as_slice(&self) -> &[Real] {
        self.0.as_slice()
    }

    /// Running (prefix) sum: element `k` is the sum of elements `0..=k`.
    pub fn cumulative_sum(&self) -> Self {
        let mut acc = 0.0;
        Self(self.0.map(|x| {
            acc += x;
            acc
        }))
    }

    /// Iterator over elements.
    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.0.iter()
    }
}

// ── Index ─────────────────────────────────────────────────────────────────────

impl Index<usize> for Array {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        &self.0[i]
    }
}
