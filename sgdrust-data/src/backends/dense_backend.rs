// sgdrust-data/src/backends/dense_backend.rs

use super::traits::{check_row_args, RowSource};
use sgdrust_core::{DenseMatrix, SgdRustError};

/// Row access over a fully resident, row-major matrix.
#[derive(Debug, Clone, Copy)]
pub struct DenseBackend<'a> {
    matrix: &'a DenseMatrix,
}

impl<'a> DenseBackend<'a> {
    pub fn new(matrix: &'a DenseMatrix) -> Self {
        DenseBackend { matrix }
    }

    pub fn matrix(&self) -> &'a DenseMatrix {
        self.matrix
    }
}

impl RowSource for DenseBackend<'_> {
    fn n_samples(&self) -> usize {
        self.matrix.nrows()
    }

    fn n_features(&self) -> usize {
        self.matrix.ncols()
    }

    fn copy_row(&self, i: usize, buf: &mut [f64]) -> Result<(), SgdRustError> {
        check_row_args(i, buf.len(), self.n_samples(), self.n_features())?;
        let row = self.matrix.row(i).ok_or(SgdRustError::IndexOutOfRange {
            index: i,
            len: self.n_samples(),
        })?;
        buf.copy_from_slice(row);
        Ok(())
    }
}

#[cfg(test)]
#[path = "dense_backend_test.rs"]
mod tests;
