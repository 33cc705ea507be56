// sgdrust-core/src/matrix/column_major.rs

use crate::error::SgdRustError;
use crate::matrix::DenseMatrix;
use num_traits::ToPrimitive;
use std::fmt::Debug;

/// Element-wise access to a column-major matrix that may not be resident in memory.
///
/// Implementors only expose random access to single elements addressed as
/// (`col`, `row`); there is no row access. Storage behind this trait must stay
/// read-only for as long as anything borrows it.
pub trait ColumnMajorStorage: Debug + Send + Sync {
    /// The stored element type. Converted to `f64` when rows are materialized.
    type Element: Copy + ToPrimitive;

    /// Number of rows (samples).
    fn nrow(&self) -> usize;

    /// Number of columns (features).
    fn ncol(&self) -> usize;

    /// Returns the element in column `col`, row `row`.
    ///
    /// # Errors
    ///
    /// Returns `SgdRustError::IndexOutOfRange` if either coordinate is out of bounds.
    fn get(&self, col: usize, row: usize) -> Result<Self::Element, SgdRustError>;
}

/// An in-memory column-major matrix.
///
/// Column `j` occupies `data[j * nrow..(j + 1) * nrow]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMajorMatrix<T> {
    data: Vec<T>,
    nrow: usize,
    ncol: usize,
}

impl<T: Copy + ToPrimitive + Debug + Send + Sync> ColumnMajorMatrix<T> {
    /// Creates a new `ColumnMajorMatrix` from column-major data.
    ///
    /// # Errors
    ///
    /// Returns `SgdRustError::DimensionMismatch` if `data.len() != nrow * ncol`.
    pub fn new(data: Vec<T>, nrow: usize, ncol: usize) -> Result<Self, SgdRustError> {
        let expected = nrow.checked_mul(ncol).ok_or_else(|| {
            SgdRustError::InvalidArgument(format!("matrix shape {}x{} overflows usize", nrow, ncol))
        })?;
        if data.len() != expected {
            return Err(SgdRustError::DimensionMismatch {
                expected,
                actual: data.len(),
                context: "ColumnMajorMatrix::new".to_string(),
            });
        }
        Ok(Self { data, nrow, ncol })
    }
}

impl ColumnMajorMatrix<f64> {
    /// Copies a row-major `DenseMatrix` into column-major layout.
    pub fn from_dense(dense: &DenseMatrix) -> Self {
        let (nrow, ncol) = (dense.nrows(), dense.ncols());
        let src = dense.as_slice();
        let mut data = Vec::with_capacity(nrow * ncol);
        for j in 0..ncol {
            data.extend((0..nrow).map(|i| src[i * ncol + j]));
        }
        Self { data, nrow, ncol }
    }
}

impl<T: Copy + ToPrimitive + Debug + Send + Sync> ColumnMajorStorage for ColumnMajorMatrix<T> {
    type Element = T;

    fn nrow(&self) -> usize {
        self.nrow
    }

    fn ncol(&self) -> usize {
        self.ncol
    }

    fn get(&self, col: usize, row: usize) -> Result<T, SgdRustError> {
        if col >= self.ncol {
            return Err(SgdRustError::IndexOutOfRange { index: col, len: self.ncol });
        }
        if row >= self.nrow {
            return Err(SgdRustError::IndexOutOfRange { index: row, len: self.nrow });
        }
        Ok(self.data[col * self.nrow + row])
    }
}

#[cfg(test)]
#[path = "column_major_test.rs"]
mod tests;
