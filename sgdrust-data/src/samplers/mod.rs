pub mod cyclic_sampler;
pub mod replacement_sampler;
pub mod traits;

pub use cyclic_sampler::CyclicSampler;
pub use replacement_sampler::ReplacementSampler;
pub use traits::Sampler;

use sgdrust_core::SgdRustError;

/// Order in which a `DataSet` visits its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingMode {
    /// Storage order, wrapping around every `n_samples` iterations.
    #[default]
    Sequential,
    /// Pre-drawn uniform indices with replacement, sized for the planned passes.
    Shuffled,
}

/// The sampler a `DataSet` resolves iterations with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexMap {
    Cyclic(CyclicSampler),
    Shuffled(ReplacementSampler),
}

impl IndexMap {
    pub fn mode(&self) -> SamplingMode {
        match self {
            IndexMap::Cyclic(_) => SamplingMode::Sequential,
            IndexMap::Shuffled(_) => SamplingMode::Shuffled,
        }
    }
}

impl Sampler for IndexMap {
    fn physical_index(&self, t: usize) -> Result<usize, SgdRustError> {
        match self {
            IndexMap::Cyclic(s) => s.physical_index(t),
            IndexMap::Shuffled(s) => s.physical_index(t),
        }
    }

    fn len(&self) -> Option<usize> {
        match self {
            IndexMap::Cyclic(s) => s.len(),
            IndexMap::Shuffled(s) => s.len(),
        }
    }
}

/// Number of iterations in `n_passes` passes over `n_samples` rows, rounded up.
///
/// # Errors
///
/// Returns `SgdRustError::InvalidArgument` if `n_passes` is negative or not
/// finite, or if the result does not fit in `usize`.
pub fn planned_iterations(n_samples: usize, n_passes: f64) -> Result<usize, SgdRustError> {
    if !n_passes.is_finite() || n_passes < 0.0 {
        return Err(SgdRustError::InvalidArgument(format!(
            "n_passes must be finite and >= 0, got {}",
            n_passes
        )));
    }
    let total = (n_samples as f64 * n_passes).ceil();
    if total >= usize::MAX as f64 {
        return Err(SgdRustError::InvalidArgument(format!(
            "{} passes over {} samples is too many iterations",
            n_passes, n_samples
        )));
    }
    Ok(total as usize)
}

/// Planned iteration count for a sequential `DataSet`.
///
/// Sequential access never runs out, so `n_passes` only bounds the stream of
/// planned iterations. Infinite or very large values give `None` (unbounded).
///
/// # Errors
///
/// Returns `SgdRustError::InvalidArgument` if `n_passes` is negative or NaN.
pub fn sequential_iterations(n_samples: usize, n_passes: f64) -> Result<Option<usize>, SgdRustError> {
    if n_passes.is_nan() || n_passes < 0.0 {
        return Err(SgdRustError::InvalidArgument(format!(
            "n_passes must be >= 0, got {}",
            n_passes
        )));
    }
    Ok(planned_iterations(n_samples, n_passes).ok())
}

#[cfg(test)]
#[path = "index_map_test.rs"]
mod tests;
