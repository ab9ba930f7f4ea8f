//! Error types for cbm.
//!
//! Every failure in the workspace is reported through the single
//! `thiserror`-derived [`Error`] enum.  Argument checks go through the
//! [`ensure!`](crate::ensure) macro.

use thiserror::Error;

/// The top-level error type used throughout cbm.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Malformed correlation input: a scalar outside (−1, 1) or a
    /// non-square matrix.
    #[error("invalid correlation input: {0}")]
    InvalidCorrelationInput(String),

    /// The Cholesky factorization met a non-positive (or non-finite)
    /// diagonal term: the requested covariance structure is not realizable.
    #[error(
        "matrix is not positive-definite: diagonal term {pivot} at row {row} is not strictly positive"
    )]
    NonPositiveDefiniteMatrix {
        /// Row at which the factorization failed.
        row: usize,
        /// The value found under the square root.
        pivot: f64,
    },

    /// Zero series or zero steps requested at an entry point.
    #[error("empty input dimension: {0}")]
    EmptyInputDimension(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Return `true` if this error reports a non-positive-definite matrix.
    pub fn is_not_positive_definite(&self) -> bool {
        matches!(self, Error::NonPositiveDefiniteMatrix { .. })
    }
}

/// Shorthand `Result` type used throughout cbm.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::$kind(format!(...)))` from the enclosing function
/// if `$cond` is false.
///
/// `$kind` names one of the message-carrying variants of [`Error`].
///
/// # Example
/// ```
/// use cbm_core::{ensure, errors::Error};
/// fn steps(n: usize) -> cbm_core::errors::Result<usize> {
///     ensure!(n > 0, EmptyInputDimension, "need at least one step, got {n}");
///     Ok(n)
/// }
/// assert_eq!(steps(4), Ok(4));
/// assert!(matches!(steps(0), Err(Error::EmptyInputDimension(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$kind(format!($($msg)*)));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_definite_message() {
        let e = Error::NonPositiveDefiniteMatrix {
            row: 1,
            pivot: -1.25,
        };
        assert!(e.is_not_positive_definite());
        let msg = e.to_string();
        assert!(msg.contains("row 1"), "{msg}");
        assert!(msg.contains("-1.25"), "{msg}");
    }

    #[test]
    fn ensure_returns_requested_variant() {
        fn check(rho: f64) -> Result<f64> {
            ensure!(
                rho > -1.0 && rho < 1.0,
                InvalidCorrelationInput,
                "rho = {rho} out of range"
            );
            Ok(rho)
        }
        assert_eq!(check(0.5), Ok(0.5));
        match check(1.5) {
            Err(Error::InvalidCorrelationInput(msg)) => assert!(msg.contains("1.5"), "{msg}"),
            other => panic!("expected InvalidCorrelationInput, got {other:?}"),
        }
        assert!(check(f64::NAN).is_err());
    }
}
