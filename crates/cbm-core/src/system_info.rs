//! Processor and worker count query.
//!
//! A stateless snapshot of how many cores a caller could spread independent
//! simulations over.  The generator itself never consults it.

use std::num::NonZeroUsize;

/// Core and worker counts at the time of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemInfo {
    /// Cores available to this process (honours affinity masks and quotas).
    pub available_cores: usize,
    /// Workers the caller currently has running.
    pub active_workers: usize,
    /// Logical cores on the machine.
    pub total_cores: usize,
}

impl SystemInfo {
    /// Query the current machine.
    ///
    /// `active_workers` is supplied by the caller, which owns any worker
    /// pool; this crate does not spawn workers.
    pub fn query(active_workers: usize) -> Self {
        let available_cores = std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self {
            available_cores,
            active_workers,
            total_cores: num_cpus::get(),
        }
    }

    /// Cores not yet occupied by active workers.
    pub fn idle_cores(&self) -> usize {
        self.available_cores.saturating_sub(self.active_workers)
    }
}
