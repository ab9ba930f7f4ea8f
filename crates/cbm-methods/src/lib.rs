//! # cbm-methods
//!
//! Monte Carlo methods: correlated Brownian increment generation and the
//! estimate records built on top of it.
//!
//! # Modules
//!
//! * [`monte_carlo`]: correlation input, Cholesky factor, noise, paths,
//!   generator, diagnostics, estimates

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Correlated Brownian increments and Monte Carlo estimate records.
pub mod monte_carlo;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use monte_carlo::{
    accumulate_paths, apply_correlation, correlation_report, generate_correlated_increments,
    generate_correlated_paths, independent_increments, simulate, simulate_seeded,
    CholeskyFactor, ConfidenceInterval, ConfidenceLevel, ConvergenceSeries, CorrelatedGenerator,
    CorrelationReport, CorrelationSpec, CorrelationStructure, McEstimate, SimulationOutput,
    TimeGrid,
};
