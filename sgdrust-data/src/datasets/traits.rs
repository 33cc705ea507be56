use sgdrust_core::SgdRustError;

/// Represents a dataset that can be accessed by physical row index.
///
/// A dataset is a fixed collection of items; each item is fetched fresh and
/// owned by the caller. The item type must be `Send` and `'static` so items can
/// be handed to other threads.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item: Send + 'static;

    /// Returns the item at the given row.
    ///
    /// # Errors
    ///
    /// Returns `SgdRustError` if the index is out of bounds or if there's
    /// an issue reading the row from storage.
    fn get(&self, index: usize) -> Result<Self::Item, SgdRustError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
