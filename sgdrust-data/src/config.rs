// sgdrust-data/src/config.rs

use crate::samplers::SamplingMode;

/// Construction-time settings for a `DataSet`.
///
/// `n_passes` is the number of planned passes over the data. It sizes the
/// shuffled index sequence and the stream of planned iterations; a sequential
/// `DataSet` can still be read past it.
///
/// `n_features`, when set, is the feature count the caller expects; construction
/// fails if the backend disagrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataSetConfig {
    pub n_passes: f64,
    pub sampling_mode: SamplingMode,
    pub n_features: Option<usize>,
}

impl Default for DataSetConfig {
    fn default() -> Self {
        DataSetConfig {
            n_passes: 1.0,
            sampling_mode: SamplingMode::Sequential,
            n_features: None,
        }
    }
}

impl DataSetConfig {
    /// Flag-style constructor: `shuffle` selects `SamplingMode::Shuffled`.
    pub fn from_flags(n_passes: f64, shuffle: bool) -> Self {
        let sampling_mode = if shuffle {
            SamplingMode::Shuffled
        } else {
            SamplingMode::Sequential
        };
        DataSetConfig {
            n_passes,
            sampling_mode,
            n_features: None,
        }
    }

    pub fn with_passes(mut self, n_passes: f64) -> Self {
        self.n_passes = n_passes;
        self
    }

    pub fn with_features(mut self, n_features: usize) -> Self {
        self.n_features = Some(n_features);
        self
    }

    pub fn with_mode(mut self, sampling_mode: SamplingMode) -> Self {
        self.sampling_mode = sampling_mode;
        self
    }

    pub fn shuffled(self) -> Self {
        self.with_mode(SamplingMode::Shuffled)
    }

    pub fn sequential(self) -> Self {
        self.with_mode(SamplingMode::Sequential)
    }
}
