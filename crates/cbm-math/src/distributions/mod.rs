//! Probability distributions, delegating to the `statrs` crate.

pub mod normal;

pub use normal::{normal_cdf_inverse, two_sided_quantile};
