// sgdrust-core/src/matrix/dense.rs

use crate::error::SgdRustError;
use rand::Rng;
use rand_distr::StandardNormal;

/// A fully resident, row-major matrix of `f64`.
///
/// Row `i` occupies `data[i * ncols..(i + 1) * ncols]`, so fetching a row is a
/// single contiguous slice.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl DenseMatrix {
    /// Creates a new `DenseMatrix` from row-major data.
    ///
    /// # Errors
    ///
    /// Returns `SgdRustError::DimensionMismatch` if `data.len() != nrows * ncols`.
    pub fn new(data: Vec<f64>, nrows: usize, ncols: usize) -> Result<Self, SgdRustError> {
        let expected = checked_len(nrows, ncols)?;
        if data.len() != expected {
            return Err(SgdRustError::DimensionMismatch {
                expected,
                actual: data.len(),
                context: "DenseMatrix::new".to_string(),
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Creates a new `DenseMatrix` from a vector of rows.
    ///
    /// All rows must have the same length. An empty vector yields a `0 x 0` matrix.
    ///
    /// # Errors
    ///
    /// Returns `SgdRustError::DimensionMismatch` if a row's length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SgdRustError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(SgdRustError::DimensionMismatch {
                    expected: ncols,
                    actual: row.len(),
                    context: format!("DenseMatrix::from_rows (row {})", i),
                });
            }
            data.extend(row);
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Creates an `nrows x ncols` matrix of standard normal draws.
    ///
    /// # Errors
    ///
    /// Returns `SgdRustError::InvalidArgument` if `nrows * ncols` overflows `usize`.
    pub fn random_normal<R: Rng + ?Sized>(
        nrows: usize,
        ncols: usize,
        rng: &mut R,
    ) -> Result<Self, SgdRustError> {
        let len = checked_len(nrows, ncols)?;
        let data = (0..len)
            .map(|_| rng.sample::<f64, _>(StandardNormal))
            .collect();
        Ok(Self { data, nrows, ncols })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns row `i` as a slice, or `None` if `i >= nrows`.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.nrows {
            return None;
        }
        let start = i * self.ncols;
        Some(&self.data[start..start + self.ncols])
    }

    /// Returns the element at (`row`, `col`), or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }
        Some(self.data[row * self.ncols + col])
    }

    /// Row-major view of the whole buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

fn checked_len(nrows: usize, ncols: usize) -> Result<usize, SgdRustError> {
    nrows.checked_mul(ncols).ok_or_else(|| {
        SgdRustError::InvalidArgument(format!("matrix shape {}x{} overflows usize", nrows, ncols))
    })
}

#[cfg(test)]
#[path = "dense_test.rs"]
mod tests;
