pub mod data_set;
pub mod traits;

pub use data_set::DataSet;
pub use traits::Dataset;
