// sgdrust-data/src/samplers/traits.rs

use sgdrust_core::SgdRustError;
use std::fmt::Debug;

/// Maps a 1-based training iteration counter to a physical row index.
///
/// Samplers are immutable once built, so a single sampler can serve several
/// training threads as long as each keeps its own iteration counter.
pub trait Sampler: Debug + Send + Sync {
    /// Returns the zero-based row to read at iteration `t` (`t >= 1`).
    ///
    /// # Errors
    ///
    /// Returns `SgdRustError::IndexOutOfRange` if `t == 0` or if `t` lies beyond
    /// the iterations this sampler was built for.
    fn physical_index(&self, t: usize) -> Result<usize, SgdRustError>;

    /// Number of iterations this sampler can resolve, or `None` if unbounded.
    fn len(&self) -> Option<usize>;

    fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

/// Converts a 1-based iteration counter into a zero-based position.
pub(crate) fn zero_based(t: usize, len: usize) -> Result<usize, SgdRustError> {
    t.checked_sub(1)
        .ok_or(SgdRustError::IndexOutOfRange { index: t, len })
}
