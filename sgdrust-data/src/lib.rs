//! Iteration-indexed access to training data for stochastic optimizers.
//!
//! A [`DataSet`] answers "which sample does iteration `t` use?" over either an
//! in-memory matrix or column-major out-of-core storage.

pub mod backends;
pub mod config;
pub mod data_point;
pub mod datasets;
pub mod samplers;
pub mod stream;

// Re-export main components
pub use backends::{Backend, DenseBackend, OutOfCoreBackend, RowSource};
pub use config::DataSetConfig;
pub use data_point::DataPoint;
pub use datasets::{DataSet, Dataset};
pub use samplers::{CyclicSampler, IndexMap, ReplacementSampler, Sampler, SamplingMode};
pub use stream::DataPointStream;
