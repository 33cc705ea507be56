// sgdrust-data/src/backends/traits.rs

use sgdrust_core::SgdRustError;

/// Uniform row access over a feature matrix, whatever medium stores it.
///
/// Implementors are read-only: fetching a row has no side effects, so distinct
/// rows may be fetched concurrently from several threads.
pub trait RowSource {
    /// Number of rows (samples).
    fn n_samples(&self) -> usize;

    /// Number of features per row.
    fn n_features(&self) -> usize;

    /// Copies row `i` into `buf`.
    ///
    /// # Errors
    ///
    /// Returns `SgdRustError::IndexOutOfRange` if `i >= n_samples()` and
    /// `SgdRustError::DimensionMismatch` if `buf.len() != n_features()`.
    fn copy_row(&self, i: usize, buf: &mut [f64]) -> Result<(), SgdRustError>;

    /// Returns row `i` as a freshly allocated vector of length `n_features()`.
    fn get_row(&self, i: usize) -> Result<Vec<f64>, SgdRustError> {
        let mut row = vec![0.0; self.n_features()];
        self.copy_row(i, &mut row)?;
        Ok(row)
    }
}

pub(crate) fn check_row_args(
    i: usize,
    buf_len: usize,
    n_samples: usize,
    n_features: usize,
) -> Result<(), SgdRustError> {
    if i >= n_samples {
        return Err(SgdRustError::IndexOutOfRange {
            index: i,
            len: n_samples,
        });
    }
    if buf_len != n_features {
        return Err(SgdRustError::DimensionMismatch {
            expected: n_features,
            actual: buf_len,
            context: "RowSource::copy_row buffer".to_string(),
        });
    }
    Ok(())
}
