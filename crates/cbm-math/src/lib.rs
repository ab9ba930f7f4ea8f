//! # cbm-math
//!
//! Mathematical building blocks for cbm: matrix/array newtypes (over
//! nalgebra), the Cholesky factorizer and covariance helpers, statistics
//! accumulators, normal quantiles (via statrs), and seedable random
//! sources.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// One-dimensional real vector.
pub mod array;

/// Probability distributions.
pub mod distributions;

/// Two-dimensional real matrix.
pub mod matrix;

/// Cholesky factorization and covariance utilities.
pub mod matrix_utilities;

/// Random sources.
pub mod random_numbers;

/// Statistics accumulators and sample moments.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use distributions::{normal_cdf_inverse, two_sided_quantile};
pub use matrix::Matrix;
pub use matrix_utilities::{cholesky_decomposition, get_covariance, reconstruction_error};
pub use random_numbers::{fill_normal, rng_from_seed, seeded_rng, MersenneTwisterUniformRng};
pub use statistics::{row_covariance, sample_correlation, Statistics};
