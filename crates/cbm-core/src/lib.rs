//! # cbm-core
//!
//! Core types, error definitions, and settings for cbm.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – type aliases, the error hierarchy, the
//! generator settings, and the system information query.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Generator settings (time horizon, step count, seed, verbosity).
pub mod settings;

/// Processor and worker count query.
pub mod system_info;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A time measurement in years.
pub type Time = Real;

/// A correlation coefficient in (−1, 1).
pub type Correlation = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{GeneratorSettings, MAX_STEPS};
pub use system_info::SystemInfo;
