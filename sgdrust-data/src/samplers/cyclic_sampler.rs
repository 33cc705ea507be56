// sgdrust-data/src/samplers/cyclic_sampler.rs

use super::traits::{zero_based, Sampler};
use sgdrust_core::SgdRustError;

/// Visits rows in storage order and wraps around after the last one.
///
/// Iteration `t` maps to row `(t - 1) % n_samples`; the order repeats every
/// `n_samples` iterations and never runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclicSampler {
    n_samples: usize,
}

impl CyclicSampler {
    /// Creates a new `CyclicSampler` over `n_samples` rows.
    ///
    /// # Errors
    ///
    /// Returns `SgdRustError::EmptyData` if `n_samples == 0`.
    pub fn new(n_samples: usize) -> Result<Self, SgdRustError> {
        if n_samples == 0 {
            return Err(SgdRustError::EmptyData {
                context: "CyclicSampler needs at least one sample".to_string(),
            });
        }
        Ok(CyclicSampler { n_samples })
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }
}

impl Sampler for CyclicSampler {
    fn physical_index(&self, t: usize) -> Result<usize, SgdRustError> {
        let p = zero_based(t, self.n_samples)?;
        Ok(p % self.n_samples)
    }

    fn len(&self) -> Option<usize> {
        None
    }
}

#[cfg(test)]
#[path = "cyclic_sampler_test.rs"]
mod tests;
