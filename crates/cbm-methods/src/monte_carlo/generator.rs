//! Correlated Brownian increment generation.
//!
//! The pipeline is: resolve the [`CorrelationSpec`] into a
//! [`CorrelationStructure`], factor it, draw independent `N(0, dT)`
//! increments, and mix them through the Cholesky factor.  Paths are the
//! optional row-wise prefix sum of the result.

use super::correlate::apply_correlation;
use super::correlation::{CholeskyFactor, CorrelationSpec, CorrelationStructure};
use super::diagnostics::{correlation_report, CorrelationReport};
use super::noise::independent_increments;
use super::path::accumulate_paths;
use super::time_grid::TimeGrid;
use cbm_core::{errors::Result, Correlation, GeneratorSettings, Size, SystemInfo};
use cbm_math::{rng_from_seed, Matrix};
use rand::Rng;

/// A factored correlation structure on a fixed time grid.
///
/// Factoring happens once, in [`CorrelatedGenerator::new`]; each draw
/// only samples and multiplies.  The generator owns no random source and
/// draws through `&self`, so one instance can be shared between threads
/// that each bring their own RNG.
#[derive(Debug, Clone)]
pub struct CorrelatedGenerator {
    structure: CorrelationStructure,
    factor: CholeskyFactor,
    grid: TimeGrid,
}

impl CorrelatedGenerator {
    /// Validate and factor `spec` for draws on `grid`.
    ///
    /// # Errors
    /// * [`cbm_core::Error::InvalidCorrelationInput`] /
    ///   [`cbm_core::Error::EmptyInputDimension`] from the correlation input.
    /// * [`cbm_core::Error::NonPositiveDefiniteMatrix`] from factorization.
    pub fn new(spec: CorrelationSpec, grid: TimeGrid) -> Result<Self> {
        let structure = CorrelationStructure::new(spec)?;
        Self::from_structure(structure, grid)
    }

    /// Factor an already resolved structure.
    pub fn from_structure(structure: CorrelationStructure, grid: TimeGrid) -> Result<Self> {
        let factor = structure.factorize()?;
        tracing::debug!(
            series = structure.series_count(),
            steps = grid.steps(),
            dt = grid.dt(),
            "correlated generator ready"
        );
        Ok(Self {
            structure,
            factor,
            grid,
        })
    }

    /// Build from a spec and the horizon / step count of `settings`.
    pub fn from_settings(spec: CorrelationSpec, settings: &GeneratorSettings) -> Result<Self> {
        Self::new(spec, TimeGrid::from_settings(settings)?)
    }

    /// Number of series per draw.
    pub fn series_count(&self) -> Size {
        self.structure.series_count()
    }

    /// The resolved correlation structure.
    pub fn structure(&self) -> &CorrelationStructure {
        &self.structure
    }

    /// The Cholesky factor of the structure.
    pub fn factor(&self) -> &CholeskyFactor {
        &self.factor
    }

    /// The time grid.
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Correlation the first two series are expected to show: the scalar
    /// input when there was one, otherwise `Σ01 / √(Σ00 Σ11)`.
    pub fn target_correlation(&self) -> Option<Correlation> {
        self.structure
            .requested_rho()
            .or_else(|| self.structure.pair_correlation(0, 1))
    }

    /// Independent (pre-correlation) increments, `series × steps`.
    pub fn independent_increments<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Matrix> {
        independent_increments(self.series_count(), self.grid.steps(), self.grid.dt(), rng)
    }

    /// One draw of correlated increments, `series × steps`.
    pub fn increments<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Matrix> {
        let x = self.independent_increments(rng)?;
        apply_correlation(&self.factor, &x)
    }

    /// One draw of correlated Brownian paths (cumulative increments).
    pub fn paths<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Matrix> {
        self.increments(rng).map(|cx| accumulate_paths(&cx))
    }
}

/// Correlated increments for `spec` on `grid`, in one call.
pub fn generate_correlated_increments<R: Rng + ?Sized>(
    spec: CorrelationSpec,
    grid: TimeGrid,
    rng: &mut R,
) -> Result<Matrix> {
    CorrelatedGenerator::new(spec, grid)?.increments(rng)
}

/// Correlated Brownian paths for `spec` on `grid`, in one call.
pub fn generate_correlated_paths<R: Rng + ?Sized>(
    spec: CorrelationSpec,
    grid: TimeGrid,
    rng: &mut R,
) -> Result<Matrix> {
    CorrelatedGenerator::new(spec, grid)?.paths(rng)
}

/// Everything a settings-driven run produces.
#[derive(Debug, Clone)]
pub struct SimulationOutput {
    /// Correlated increments, `series × steps`.
    pub increments: Matrix,
    /// Cumulative paths, when [`GeneratorSettings::paths`] was set.
    pub paths: Option<Matrix>,
    /// Correlation check, when [`GeneratorSettings::verbose`] was set and
    /// the draw has at least two series and two steps.
    pub report: Option<CorrelationReport>,
}

/// Run the generator as described by `settings`, drawing from `rng`.
///
/// `settings.seed` is not consulted; see [`simulate_seeded`].  With
/// `verbose` set, the correlation report is computed after generation and
/// logged at `info` level.
pub fn simulate<R: Rng + ?Sized>(
    spec: CorrelationSpec,
    settings: &GeneratorSettings,
    rng: &mut R,
) -> Result<SimulationOutput> {
    let generator = CorrelatedGenerator::from_settings(spec, settings)?;
    if settings.verbose {
        let info = SystemInfo::query(1);
        tracing::debug!(
            available_cores = info.available_cores,
            active_workers = info.active_workers,
            total_cores = info.total_cores,
            idle_cores = info.idle_cores(),
            "running single-threaded"
        );
    }
    let increments = generator.increments(rng)?;

    let report = match generator.target_correlation() {
        Some(rho) if settings.verbose && increments.cols() >= 2 => {
            let report = correlation_report(&increments, rho)?;
            report.log();
            Some(report)
        }
        _ => None,
    };
    let paths = settings.paths.then(|| accumulate_paths(&increments));

    Ok(SimulationOutput {
        increments,
        paths,
        report,
    })
}

/// [`simulate`] with a `StdRng` seeded from `settings.seed`, or from OS
/// entropy when no seed is set.
pub fn simulate_seeded(
    spec: CorrelationSpec,
    settings: &GeneratorSettings,
) -> Result<SimulationOutput> {
    simulate(spec, settings, &mut rng_from_seed(settings.seed))
}
