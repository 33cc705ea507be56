// sgdrust-data/src/backends/out_of_core_backend.rs

use super::traits::{check_row_args, RowSource};
use sgdrust_core::num_traits::ToPrimitive;
use sgdrust_core::{ColumnMajorStorage, SgdRustError};

/// Row access over externally owned column-major storage.
///
/// The storage only offers element access, so a row is assembled by reading
/// element (`j`, `i`) for every feature column `j`. This is one storage read per
/// feature and is the slow path compared to [`DenseBackend`](super::DenseBackend).
#[derive(Debug)]
pub struct OutOfCoreBackend<'a, S: ColumnMajorStorage> {
    storage: &'a S,
}

// Manual impls: a derive would needlessly require `S: Clone`.
impl<S: ColumnMajorStorage> Clone for OutOfCoreBackend<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ColumnMajorStorage> Copy for OutOfCoreBackend<'_, S> {}

impl<'a, S: ColumnMajorStorage> OutOfCoreBackend<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        OutOfCoreBackend { storage }
    }

    pub fn storage(&self) -> &'a S {
        self.storage
    }
}

impl<S: ColumnMajorStorage> RowSource for OutOfCoreBackend<'_, S> {
    fn n_samples(&self) -> usize {
        self.storage.nrow()
    }

    fn n_features(&self) -> usize {
        self.storage.ncol()
    }

    fn copy_row(&self, i: usize, buf: &mut [f64]) -> Result<(), SgdRustError> {
        check_row_args(i, buf.len(), self.n_samples(), self.n_features())?;
        for (j, slot) in buf.iter_mut().enumerate() {
            *slot = self
                .storage
                .get(j, i)?
                .to_f64()
                .ok_or(SgdRustError::ElementConversion { row: i, col: j })?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "out_of_core_backend_test.rs"]
mod tests;
