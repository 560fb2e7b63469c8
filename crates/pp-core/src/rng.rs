//! Seedable RNG wrapper for facility placement.
//!
//! # Determinism strategy
//!
//! The optimizer never touches a global random source.  Callers construct a
//! `PlacementRng` and pass it by `&mut`:
//!
//! - `PlacementRng::new(seed)` gives a fully reproducible run.
//! - `PlacementRng::from_entropy()` gives a fresh sequence each run.
//!
//! Initial centroids are the only random draw in the whole pipeline, so a
//! fixed seed makes every stage reproducible.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// RNG used to sample initial centroids.
#[derive(Debug)]
pub struct PlacementRng(SmallRng);

impl PlacementRng {
    pub fn new(seed: u64) -> Self {
        PlacementRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        PlacementRng(SmallRng::from_entropy())
    }

    /// Fixed seed if given, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy(),
        }
    }

    /// Choose a random element from a slice, uniformly.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}
