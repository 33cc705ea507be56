// sgdrust-data/src/data_point.rs

/// One training sample: a feature row, its label and the row it was read from.
///
/// A fresh `DataPoint` is built for every access; it owns its features and is
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    features: Vec<f64>,
    label: f64,
    row_index: usize,
}

impl DataPoint {
    pub fn new(features: Vec<f64>, label: f64, row_index: usize) -> Self {
        DataPoint {
            features,
            label,
            row_index,
        }
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn label(&self) -> f64 {
        self.label
    }

    /// Zero-based physical row this sample was read from.
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    pub fn n_features(&self) -> usize {
        self.features.len()
    }

    /// Consumes the point, returning `(features, label, row_index)`.
    pub fn into_parts(self) -> (Vec<f64>, f64, usize) {
        (self.features, self.label, self.row_index)
    }
}

#[cfg(test)]
#[path = "data_point_test.rs"]
mod tests;
