// Storage layer: matrices that training data can be read from.
pub mod matrix;

pub mod error;
pub use error::SgdRustError;

// Re-export the storage types so they are reachable as `sgdrust_core::DenseMatrix` etc.
pub use matrix::{ColumnMajorMatrix, ColumnMajorStorage, DenseMatrix, MappedMatrix};
// Re-export traits required by public bounds
pub use num_traits;
