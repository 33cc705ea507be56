// sgdrust-data/src/datasets/data_set.rs

use super::traits::Dataset;
use crate::backends::{Backend, RowSource};
use crate::config::DataSetConfig;
use crate::data_point::DataPoint;
use crate::samplers::{
    planned_iterations, sequential_iterations, CyclicSampler, IndexMap, ReplacementSampler, Sampler,
    SamplingMode,
};
use crate::stream::DataPointStream;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sgdrust_core::{ColumnMajorMatrix, ColumnMajorStorage, SgdRustError};

/// Training data addressed by a 1-based iteration counter.
///
/// A `DataSet` pairs a [`Backend`] with a label vector and resolves iteration
/// `t` to a physical row, either cyclically or through a shuffled index sequence
/// drawn once at construction.
///
/// # Ownership
///
/// The backend borrows its matrix (or external storage handle) for `'a`, so the
/// storage must outlive the `DataSet` and cannot be modified while it exists.
/// The `DataSet` never extends the storage's lifetime. Labels and the shuffled
/// index sequence are owned.
///
/// All accessors take `&self`; after construction the `DataSet` is read-only and
/// can be shared between threads, each keeping its own iteration counter.
#[derive(Debug)]
pub struct DataSet<'a, S: ColumnMajorStorage = ColumnMajorMatrix<f64>> {
    backend: Backend<'a, S>,
    labels: Vec<f64>,
    n_samples: usize,
    n_features: usize,
    n_passes: f64,
    planned_iterations: Option<usize>,
    index_map: IndexMap,
}

impl<'a, S: ColumnMajorStorage> DataSet<'a, S> {
    /// Creates a new `DataSet`, seeding any shuffled sequence from OS entropy.
    ///
    /// # Errors
    ///
    /// See [`DataSet::with_rng`].
    pub fn new(
        backend: Backend<'a, S>,
        labels: Vec<f64>,
        config: DataSetConfig,
    ) -> Result<Self, SgdRustError> {
        let mut rng = StdRng::from_entropy();
        Self::with_rng(backend, labels, config, &mut rng)
    }

    /// Creates a new `DataSet`, drawing any shuffled sequence from `rng`.
    ///
    /// `rng` is only used in `SamplingMode::Shuffled`.
    ///
    /// # Errors
    ///
    /// * `SgdRustError::EmptyData` if the backend has no rows or no columns.
    /// * `SgdRustError::DimensionMismatch` if `labels.len()` differs from the
    ///   number of rows, or `config.n_features` differs from the backend's.
    /// * `SgdRustError::InvalidArgument` if `config.n_passes` is negative or NaN, or,
    ///   in shuffled mode, infinite or too large to size the index sequence.
    pub fn with_rng<R: Rng + ?Sized>(
        backend: Backend<'a, S>,
        labels: Vec<f64>,
        config: DataSetConfig,
        rng: &mut R,
    ) -> Result<Self, SgdRustError> {
        let n_samples = backend.n_samples();
        let n_features = backend.n_features();
        if n_samples == 0 {
            return Err(SgdRustError::EmptyData {
                context: format!("{} backend has no rows", backend.kind()),
            });
        }
        if n_features == 0 {
            return Err(SgdRustError::EmptyData {
                context: format!("{} backend has no feature columns", backend.kind()),
            });
        }
        if let Some(declared) = config.n_features {
            if declared != n_features {
                return Err(SgdRustError::DimensionMismatch {
                    expected: declared,
                    actual: n_features,
                    context: "declared n_features vs backend columns".to_string(),
                });
            }
        }
        if labels.len() != n_samples {
            return Err(SgdRustError::DimensionMismatch {
                expected: n_samples,
                actual: labels.len(),
                context: "label vector length vs backend rows".to_string(),
            });
        }

        let (planned, index_map) = match config.sampling_mode {
            SamplingMode::Sequential => (
                sequential_iterations(n_samples, config.n_passes)?,
                IndexMap::Cyclic(CyclicSampler::new(n_samples)?),
            ),
            SamplingMode::Shuffled => (
                Some(planned_iterations(n_samples, config.n_passes)?),
                IndexMap::Shuffled(ReplacementSampler::new(n_samples, config.n_passes, rng)?),
            ),
        };
        if index_map.is_empty() {
            log::warn!(
                "Shuffled DataSet built with n_passes = {}: every get_data_point call will fail.",
                config.n_passes
            );
        }
        log::debug!(
            "DataSet: {} backend, {} samples x {} features, {:?} mode, {:?} planned iterations",
            backend.kind(),
            n_samples,
            n_features,
            index_map.mode(),
            planned
        );

        Ok(DataSet {
            backend,
            labels,
            n_samples,
            n_features,
            n_passes: config.n_passes,
            planned_iterations: planned,
            index_map,
        })
    }

    /// Returns the sample for iteration `t` (1-based).
    ///
    /// # Errors
    ///
    /// Returns `SgdRustError::IndexOutOfRange` if `t == 0`, or, in shuffled mode,
    /// if `t` exceeds the length of the shuffled sequence. Backend read errors are
    /// propagated.
    pub fn get_data_point(&self, t: usize) -> Result<DataPoint, SgdRustError> {
        let row = self.physical_index(t)?;
        log::trace!("iteration {} -> row {}", t, row);
        self.get(row)
    }

    /// Resolves iteration `t` (1-based) to the zero-based row it reads.
    pub fn physical_index(&self, t: usize) -> Result<usize, SgdRustError> {
        self.index_map.physical_index(t)
    }

    /// Iterates over the planned iterations `1..=planned_iterations()` in order.
    ///
    /// Without a planned count the stream does not end on its own.
    pub fn stream(&self) -> DataPointStream<'_, 'a, S> {
        DataPointStream::new(self)
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn n_passes(&self) -> f64 {
        self.n_passes
    }

    /// `ceil(n_samples * n_passes)`, or `None` for a sequential set whose
    /// passes are infinite or too many to count.
    pub fn planned_iterations(&self) -> Option<usize> {
        self.planned_iterations
    }

    pub fn sampling_mode(&self) -> SamplingMode {
        self.index_map.mode()
    }

    pub fn is_out_of_core(&self) -> bool {
        self.backend.is_out_of_core()
    }

    pub fn backend(&self) -> &Backend<'a, S> {
        &self.backend
    }

    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// The pre-drawn row sequence, or `None` in sequential mode.
    pub fn shuffled_indices(&self) -> Option<&[usize]> {
        match &self.index_map {
            IndexMap::Shuffled(s) => Some(s.indices()),
            IndexMap::Cyclic(_) => None,
        }
    }
}

impl<S: ColumnMajorStorage> Dataset for DataSet<'_, S> {
    type Item = DataPoint;

    /// Reads physical row `index` and its label, bypassing the sampler.
    fn get(&self, index: usize) -> Result<DataPoint, SgdRustError> {
        let features = self.backend.get_row(index)?;
        let label = *self.labels.get(index).ok_or(SgdRustError::IndexOutOfRange {
            index,
            len: self.labels.len(),
        })?;
        Ok(DataPoint::new(features, label, index))
    }

    fn len(&self) -> usize {
        self.n_samples
    }
}

#[cfg(test)]
#[path = "data_set_test.rs"]
mod tests;
