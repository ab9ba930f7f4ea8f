//! Monte Carlo estimate records and convergence series.
//!
//! These are the tabular shapes handed to reporting and charting code:
//! one [`McEstimate`] per pricing run (`price` plus a confidence interval
//! per level) and a [`ConvergenceSeries`] of estimates keyed by the number
//! of simulations.  Nothing here renders anything.

use cbm_core::{
    errors::{Error, Result},
    Real, Size,
};
use cbm_math::{two_sided_quantile, Statistics};
use std::collections::BTreeMap;

/// Two-sided confidence level of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfidenceLevel {
    /// 90 %.
    P90,
    /// 95 %.
    P95,
    /// 99 %.
    P99,
}

impl ConfidenceLevel {
    /// All supported levels, ascending.
    pub const ALL: [ConfidenceLevel; 3] =
        [ConfidenceLevel::P90, ConfidenceLevel::P95, ConfidenceLevel::P99];

    /// The level in percent (90, 95 or 99).
    pub fn value(self) -> u32 {
        match self {
            ConfidenceLevel::P90 => 90,
            ConfidenceLevel::P95 => 95,
            ConfidenceLevel::P99 => 99,
        }
    }

    /// The level as a probability (0.90, 0.95 or 0.99).
    pub fn probability(self) -> Real {
        Real::from(self.value()) / 100.0
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.value())
    }
}

/// Percent values of a list of levels, in the given order.
pub fn level_values(levels: &[ConfidenceLevel]) -> Vec<u32> {
    levels.iter().map(|l| l.value()).collect()
}

/// Lower and upper bound of a confidence interval.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub lower: Real,
    /// Upper bound.
    pub upper: Real,
}

impl ConfidenceInterval {
    /// `upper − lower`.
    pub fn width(&self) -> Real {
        self.upper - self.lower
    }

    /// Whether `x` lies in `[lower, upper]`.
    pub fn contains(&self, x: Real) -> bool {
        self.lower <= x && x <= self.upper
    }
}

/// A Monte Carlo price estimate with its confidence intervals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McEstimate {
    /// Sample mean of the simulated values.
    pub price: Real,
    /// Normal-approximation interval per level.
    pub ci: BTreeMap<ConfidenceLevel, ConfidenceInterval>,
}

impl McEstimate {
    /// Estimate from accumulated samples: `mean ± z · stderr` per level.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] with fewer than two samples.
    pub fn from_statistics(stats: &Statistics, levels: &[ConfidenceLevel]) -> Result<Self> {
        let (price, stderr) = match (stats.mean(), stats.error_estimate()) {
            (Some(m), Some(e)) => (m, e),
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "need at least 2 samples for an estimate, got {}",
                    stats.samples()
                )))
            }
        };
        let mut ci = BTreeMap::new();
        for &level in levels {
            let half = two_sided_quantile(level.probability())? * stderr;
            ci.insert(
                level,
                ConfidenceInterval {
                    lower: price - half,
                    upper: price + half,
                },
            );
        }
        Ok(Self { price, ci })
    }

    /// Estimate directly from a slice of simulated values.
    pub fn from_samples(samples: &[Real], levels: &[ConfidenceLevel]) -> Result<Self> {
        let mut stats = Statistics::new();
        stats.add_all(samples.iter().copied());
        Self::from_statistics(&stats, levels)
    }

    /// Interval at `level`, if it was computed.
    pub fn interval(&self, level: ConfidenceLevel) -> Option<&ConfidenceInterval> {
        self.ci.get(&level)
    }
}

/// Estimates keyed by the number of simulations `N_MC`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceSeries {
    records: BTreeMap<Size, McEstimate>,
}

impl ConvergenceSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the estimate obtained with `n_mc` simulations, replacing any
    /// earlier one for the same count.
    pub fn insert(&mut self, n_mc: Size, estimate: McEstimate) -> Option<McEstimate> {
        self.records.insert(n_mc, estimate)
    }

    /// Estimate for `n_mc`, if recorded.
    pub fn get(&self, n_mc: Size) -> Option<&McEstimate> {
        self.records.get(&n_mc)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in ascending `N_MC` order.
    pub fn iter(&self) -> impl Iterator<Item = (Size, &McEstimate)> {
        self.records.iter().map(|(&n, e)| (n, e))
    }

    /// The price column in ascending `N_MC` order.
    pub fn prices(&self) -> Vec<Real> {
        self.records.values().map(|e| e.price).collect()
    }

    /// Mean of the price column.
    pub fn mean_price(&self) -> Option<Real> {
        let mut stats = Statistics::new();
        stats.add_all(self.prices());
        stats.mean()
    }

    /// Unbiased variance of the price column.
    pub fn price_variance(&self) -> Option<Real> {
        let mut stats = Statistics::new();
        stats.add_all(self.prices());
        stats.variance()
    }
}

impl FromIterator<(Size, McEstimate)> for ConvergenceSeries {
    fn from_iter<I: IntoIterator<Item = (Size, McEstimate)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
