// stream.rs
//! # DataPointStream
//!
//! Walks a [`DataSet`] through its planned iterations, yielding one
//! [`DataPoint`] per iteration in the order a training loop would request them.
//!
//! ```rust
//! use sgdrust_core::DenseMatrix;
//! use sgdrust_data::{Backend, DataSet, DataSetConfig};
//!
//! let x = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let data = DataSet::new(Backend::dense(&x), vec![0.0, 1.0], DataSetConfig::default().with_passes(2.0)).unwrap();
//! let rows: Vec<usize> = data.stream().map(|p| p.unwrap().row_index()).collect();
//! assert_eq!(rows, vec![0, 1, 0, 1]);
//! ```

use crate::data_point::DataPoint;
use crate::datasets::DataSet;
use sgdrust_core::{ColumnMajorStorage, SgdRustError};

/// Iterator over `DataSet::get_data_point(t)` for `t = 1..=planned_iterations()`.
///
/// When the `DataSet` has no planned count the stream is unbounded. Yields
/// `Some(Err(_))` once if a fetch fails and then stops.
#[derive(Debug)]
pub struct DataPointStream<'d, 'a, S: ColumnMajorStorage> {
    data_set: &'d DataSet<'a, S>,
    next_t: usize,
    end: Option<usize>,
    done: bool,
}

impl<'d, 'a, S: ColumnMajorStorage> DataPointStream<'d, 'a, S> {
    pub(crate) fn new(data_set: &'d DataSet<'a, S>) -> Self {
        DataPointStream {
            data_set,
            next_t: 1,
            end: data_set.planned_iterations(),
            done: false,
        }
    }

    /// The iteration counter the next item will be fetched for.
    pub fn next_iteration(&self) -> usize {
        self.next_t
    }
}

impl<S: ColumnMajorStorage> Iterator for DataPointStream<'_, '_, S> {
    type Item = Result<DataPoint, SgdRustError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.end.is_some_and(|end| self.next_t > end) {
            return None;
        }
        let t = self.next_t;
        match t.checked_add(1) {
            Some(next) => self.next_t = next,
            None => self.done = true,
        }
        let result = self.data_set.get_data_point(t);
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.end {
            Some(end) => (0, Some((end + 1).saturating_sub(self.next_t))),
            None => (0, None),
        }
    }
}
