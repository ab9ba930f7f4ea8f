//! Generator settings.
//!
//! [`GeneratorSettings`] bundles the run-level knobs of a correlated
//! Brownian simulation: time horizon, step count, optional seed, whether
//! cumulative paths are wanted, and whether the correlation diagnostic is
//! reported.  It is a plain value: there is no process-wide instance, each
//! caller builds (or defaults) its own and passes it explicitly.  Horizon
//! and step count are checked where they are turned into a time grid.

use crate::{Size, Time};

/// Default number of time steps in the simulation mesh.
pub const MAX_STEPS: Size = 1_000;

/// Default time horizon (one year).
pub const DEFAULT_HORIZON: Time = 1.0;

/// Run-level settings for the correlated increment generator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorSettings {
    /// Time horizon `T` (upper bound of the time interval).
    pub horizon: Time,
    /// Number of steps `N` in the time mesh.
    pub steps: Size,
    /// Seed for the random source.  `None` draws a seed from the OS.
    pub seed: Option<u64>,
    /// Also return the cumulative paths.
    pub paths: bool,
    /// Emit the simulated-vs-requested correlation report.
    pub verbose: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            steps: MAX_STEPS,
            seed: None,
            paths: false,
            verbose: false,
        }
    }
}

impl GeneratorSettings {
    /// Create settings with the given horizon and step count.
    pub fn new(horizon: Time, steps: Size) -> Self {
        Self {
            horizon,
            steps,
            ..Self::default()
        }
    }

    /// Set the time horizon.
    pub fn with_horizon(mut self, horizon: Time) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set the step count.
    pub fn with_steps(mut self, steps: Size) -> Self {
        self.steps = steps;
        self
    }

    /// Fix the seed of the random source.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Request the cumulative paths along with the increments.
    pub fn with_paths(mut self, paths: bool) -> Self {
        self.paths = paths;
        self
    }

    /// Toggle the correlation diagnostic report.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = GeneratorSettings::default();
        assert_eq!(s.horizon, 1.0);
        assert_eq!(s.steps, MAX_STEPS);
        assert!(s.seed.is_none());
        assert!(!s.paths);
        assert!(!s.verbose);
    }

    #[test]
    fn builders() {
        let s = GeneratorSettings::new(2.0, 8)
            .with_seed(7)
            .with_paths(true)
            .with_verbose(true);
        assert_eq!(s.horizon, 2.0);
        assert_eq!(s.steps, 8);
        assert_eq!(s.seed, Some(7));
        assert!(s.paths && s.verbose);
        let s = s.with_horizon(0.5).with_steps(3);
        assert_eq!((s.horizon, s.steps), (0.5, 3));
    }
}
