//! # cbm
//!
//! Correlated Brownian increments for multi-factor Monte Carlo simulation.
//!
//! This crate is a **façade** over the workspace crates. Application code
//! should depend on it rather than on the individual `cbm-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! cbm = "0.1"
//! ```
//!
//! ```rust
//! use cbm::math::seeded_rng;
//! use cbm::methods::monte_carlo::{CorrelatedGenerator, TimeGrid};
//!
//! let grid = TimeGrid::new(1.0, 250).unwrap();
//! let generator = CorrelatedGenerator::new(0.7.into(), grid).unwrap();
//! let increments = generator.increments(&mut seeded_rng(42)).unwrap();
//! assert_eq!(increments.shape(), (2, 250));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, settings and error definitions.
pub use cbm_core as core;

/// Matrices, Cholesky factorization, statistics and random sources.
pub use cbm_math as math;

/// Correlated increment generation and Monte Carlo estimate records.
pub use cbm_methods as methods;

pub use cbm_core::{Error, GeneratorSettings, Result, SystemInfo};
pub use cbm_methods::monte_carlo::{
    generate_correlated_increments, generate_correlated_paths, simulate, simulate_seeded,
    CorrelatedGenerator, CorrelationSpec, TimeGrid,
};
