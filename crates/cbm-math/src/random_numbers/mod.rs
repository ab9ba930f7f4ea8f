//! Random sources.
//!
//! Every sampler in the workspace takes its random source as an explicit
//! `&mut R` where `R: rand::Rng + ?Sized`.  This module provides the
//! seedable sources callers usually pass in: `StdRng` through
//! [`seeded_rng`] / [`rng_from_seed`], and a Mersenne Twister
//! (MT19937-64) wrapper implementing `rand::RngCore`.

use cbm_core::Real;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::StandardNormal;
use rand_mt::Mt19937GenRand64;

/// `StdRng` seeded deterministically from `seed`.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `StdRng` seeded from `seed` when given, from OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => seeded_rng(s),
        None => StdRng::from_entropy(),
    }
}

/// Fill `out` with independent `N(0, std_dev²)` draws, in order.
pub fn fill_normal<R: Rng + ?Sized>(rng: &mut R, out: &mut [Real], std_dev: Real) {
    for x in out.iter_mut() {
        let z: Real = rng.sample(StandardNormal);
        *x = z * std_dev;
    }
}

/// A uniform pseudo-random source based on the Mersenne Twister
/// MT19937-64 algorithm.
///
/// Implements `RngCore`, so it can be handed to any sampler in place of
/// `StdRng`.
#[derive(Clone)]
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
    seed: u64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
            seed,
        }
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl std::fmt::Debug for MersenneTwisterUniformRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MersenneTwisterUniformRng")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl RngCore for MersenneTwisterUniformRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.fill_bytes(dest);
        Ok(())
    }
}
