pub mod column_major;
pub mod dense;
pub mod mapped;

pub use column_major::{ColumnMajorMatrix, ColumnMajorStorage};
pub use dense::DenseMatrix;
pub use mapped::MappedMatrix;
