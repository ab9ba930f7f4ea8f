//! Correlated Brownian increments for Monte Carlo simulation.
//!
//! # Overview
//!
//! * [`CorrelationSpec`] / [`CorrelationStructure`]: scalar ρ or matrix Σ,
//!   resolved once into a square matrix
//! * [`CholeskyFactor`]: `L` with `L·Lᵀ = Σ`, the positive-definiteness gate
//! * [`independent_increments`]: i.i.d. `N(0, dT)` noise from a caller-owned RNG
//! * [`apply_correlation`]: `L · X`
//! * [`accumulate_paths`]: row-wise prefix sums
//! * [`CorrelatedGenerator`]: the pipeline above, factored once
//! * [`correlation_report`]: after-the-fact accuracy check
//! * [`McEstimate`] / [`ConvergenceSeries`]: price + confidence interval records

pub mod correlate;
pub mod correlation;
pub mod diagnostics;
pub mod estimate;
pub mod generator;
pub mod noise;
pub mod path;
pub mod time_grid;

pub use correlate::apply_correlation;
pub use correlation::{CholeskyFactor, CorrelationSpec, CorrelationStructure};
pub use diagnostics::{
    correlation_report, empirical_covariance, increment_correlation, CorrelationReport,
};
pub use estimate::{
    level_values, ConfidenceInterval, ConfidenceLevel, ConvergenceSeries, McEstimate,
};
pub use generator::{
    generate_correlated_increments, generate_correlated_paths, simulate, simulate_seeded,
    CorrelatedGenerator, SimulationOutput,
};
pub use noise::independent_increments;
pub use path::accumulate_paths;
pub use time_grid::TimeGrid;
