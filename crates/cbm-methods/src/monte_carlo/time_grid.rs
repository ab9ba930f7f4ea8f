//! Uniform simulation time grid.

use cbm_core::{ensure, errors::Result, GeneratorSettings, Real, Size, Time};

/// A uniform grid `0 = t_0 < t_1 < … < t_N = T` with step `dT = T / N`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    horizon: Time,
    steps: Size,
}

impl TimeGrid {
    /// Create a grid over `[0, horizon]` with `steps` intervals.
    ///
    /// # Errors
    /// * [`cbm_core::Error::EmptyInputDimension`] if `steps == 0`.
    /// * [`cbm_core::Error::InvalidArgument`] if `horizon` is not positive and finite
    ///   (a zero horizon is rejected rather than producing zero increments).
    pub fn new(horizon: Time, steps: Size) -> Result<Self> {
        ensure!(steps > 0, EmptyInputDimension, "time grid needs at least one step");
        ensure!(
            horizon.is_finite() && horizon > 0.0,
            InvalidArgument,
            "time horizon must be positive and finite, got {horizon}"
        );
        Ok(Self { horizon, steps })
    }

    /// The grid described by a [`GeneratorSettings`].
    ///
    /// This is where the horizon and step count of the settings are
    /// validated; the errors are those of [`TimeGrid::new`].
    pub fn from_settings(settings: &GeneratorSettings) -> Result<Self> {
        Self::new(settings.horizon, settings.steps)
    }

    /// Time horizon `T`.
    pub fn horizon(&self) -> Time {
        self.horizon
    }

    /// Number of steps `N`.
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Step size `dT`.
    pub fn dt(&self) -> Time {
        self.horizon / self.steps as Real
    }

    /// Time of grid point `i` (`0 ≤ i ≤ N`).
    pub fn time(&self, i: Size) -> Time {
        if i == self.steps {
            self.horizon
        } else {
            i as Real * self.dt()
        }
    }

    /// All `N + 1` grid times, starting at 0 and ending exactly at `T`.
    pub fn times(&self) -> Vec<Time> {
        (0..=self.steps).map(|i| self.time(i)).collect()
    }
}
