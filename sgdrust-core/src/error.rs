use thiserror::Error;

/// Custom error type for the SgdRust crates.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum SgdRustError {
    #[error("Index out of range: index {index} for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    #[error("Empty data: {context}")]
    EmptyData { context: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Element at (row {row}, col {col}) cannot be represented as f64")]
    ElementConversion { row: usize, col: usize },

    // io::Error is neither Clone nor PartialEq, so only the message is kept.
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },
}

impl SgdRustError {
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        SgdRustError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
