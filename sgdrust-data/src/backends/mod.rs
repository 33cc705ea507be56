pub mod dense_backend;
pub mod out_of_core_backend;
pub mod traits;

pub use dense_backend::DenseBackend;
pub use out_of_core_backend::OutOfCoreBackend;
pub use traits::RowSource;

use sgdrust_core::{ColumnMajorMatrix, ColumnMajorStorage, DenseMatrix, SgdRustError};

/// The storage a `DataSet` reads feature rows from.
///
/// Exactly two variants; dispatch is a `match`, so the row fetch on the training
/// hot path is statically dispatched. Both variants borrow their storage: the
/// matrix (or external handle) must outlive every backend and `DataSet` built on it.
///
/// `S` defaults to an in-memory column-major matrix so dense-only code never has
/// to name it.
#[derive(Debug)]
pub enum Backend<'a, S: ColumnMajorStorage = ColumnMajorMatrix<f64>> {
    Dense(DenseBackend<'a>),
    OutOfCore(OutOfCoreBackend<'a, S>),
}

impl<'a> Backend<'a> {
    /// Backend over a fully resident matrix, with `S` fixed to its default.
    ///
    /// Use [`Backend::in_memory`] where `S` is a different storage type.
    pub fn dense(matrix: &'a DenseMatrix) -> Self {
        Self::in_memory(matrix)
    }
}

impl<'a, S: ColumnMajorStorage> Backend<'a, S> {
    /// Backend over a fully resident matrix, for any storage type `S`.
    pub fn in_memory(matrix: &'a DenseMatrix) -> Self {
        Backend::Dense(DenseBackend::new(matrix))
    }

    /// Backend over externally owned column-major storage.
    pub fn out_of_core(storage: &'a S) -> Self {
        Backend::OutOfCore(OutOfCoreBackend::new(storage))
    }

    pub fn is_out_of_core(&self) -> bool {
        matches!(self, Backend::OutOfCore(_))
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Backend::Dense(_) => "dense",
            Backend::OutOfCore(_) => "out-of-core",
        }
    }
}

impl<S: ColumnMajorStorage> RowSource for Backend<'_, S> {
    fn n_samples(&self) -> usize {
        match self {
            Backend::Dense(b) => b.n_samples(),
            Backend::OutOfCore(b) => b.n_samples(),
        }
    }

    fn n_features(&self) -> usize {
        match self {
            Backend::Dense(b) => b.n_features(),
            Backend::OutOfCore(b) => b.n_features(),
        }
    }

    fn copy_row(&self, i: usize, buf: &mut [f64]) -> Result<(), SgdRustError> {
        match self {
            Backend::Dense(b) => b.copy_row(i, buf),
            Backend::OutOfCore(b) => b.copy_row(i, buf),
        }
    }
}
