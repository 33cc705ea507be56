// sgdrust-data/src/samplers/replacement_sampler.rs

use super::planned_iterations;
use super::traits::{zero_based, Sampler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sgdrust_core::SgdRustError;

/// Reads rows from a sequence of uniform draws made once, with replacement.
///
/// The sequence holds `ceil(n_samples * n_passes)` independent draws from
/// `0..n_samples`. Rows may repeat within a pass and some rows may never be
/// drawn; this is not a per-epoch permutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementSampler {
    indices: Vec<usize>,
}

impl ReplacementSampler {
    /// Draws the index sequence from `rng`.
    ///
    /// Passing a seeded generator makes the sequence reproducible.
    ///
    /// # Errors
    ///
    /// Returns `SgdRustError::EmptyData` if `n_samples == 0`, and
    /// `SgdRustError::InvalidArgument` if `n_passes` is negative or not finite.
    pub fn new<R: Rng + ?Sized>(
        n_samples: usize,
        n_passes: f64,
        rng: &mut R,
    ) -> Result<Self, SgdRustError> {
        if n_samples == 0 {
            return Err(SgdRustError::EmptyData {
                context: "ReplacementSampler needs at least one sample".to_string(),
            });
        }
        let len = planned_iterations(n_samples, n_passes)?;
        let indices = (0..len).map(|_| rng.gen_range(0..n_samples)).collect();
        Ok(ReplacementSampler { indices })
    }

    /// Draws the index sequence from a generator seeded by the OS entropy source.
    pub fn from_entropy(n_samples: usize, n_passes: f64) -> Result<Self, SgdRustError> {
        let mut rng = StdRng::from_entropy();
        Self::new(n_samples, n_passes, &mut rng)
    }

    /// The drawn row indices, in iteration order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

impl Sampler for ReplacementSampler {
    fn physical_index(&self, t: usize) -> Result<usize, SgdRustError> {
        let len = self.indices.len();
        let p = zero_based(t, len)?;
        self.indices
            .get(p)
            .copied()
            .ok_or(SgdRustError::IndexOutOfRange { index: t, len })
    }

    fn len(&self) -> Option<usize> {
        Some(self.indices.len())
    }
}

#[cfg(test)]
#[path = "replacement_sampler_test.rs"]
mod tests;
