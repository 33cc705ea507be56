//! Example: feeding a toy SGD loop from a dense and a memory-mapped DataSet.
//!
//! Both DataSets wrap the same synthetic data; the memory-mapped one reads it
//! column by column from a temporary file, the way an out-of-core matrix would.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sgdrust_core::{DenseMatrix, MappedMatrix, SgdRustError};
use sgdrust_data::{Backend, DataSet, DataSetConfig};

fn main() -> Result<(), SgdRustError> {
    let mut rng = StdRng::seed_from_u64(2024);
    let x = DenseMatrix::random_normal(100, 3, &mut rng)?; // 100 samples, 3 features
    let true_weights = [0.5, -1.0, 2.0];
    let labels: Vec<f64> = (0..x.nrows())
        .map(|i| {
            x.row(i)
                .map(|r| r.iter().zip(true_weights).map(|(a, w)| a * w).sum::<f64>())
                .unwrap_or(0.0)
        })
        .collect();

    // Sequential, in memory
    let dense = DataSet::new(
        Backend::dense(&x),
        labels.clone(),
        DataSetConfig::default().with_passes(5.0),
    )?;
    println!("\n--- Sequential, dense backend ---");
    let weights = fit(&dense, 0.05)?;
    println!("learned weights: {:?}", weights);

    // Shuffled, memory-mapped
    let path = std::env::temp_dir().join("sgdrust_demo_features.bin");
    MappedMatrix::write(&path, &x)?;
    let mapped = MappedMatrix::open(&path, x.nrows(), x.ncols())?;
    let external = DataSet::new(
        Backend::out_of_core(&mapped),
        labels,
        DataSetConfig::from_flags(5.0, true),
    )?;
    println!("\n--- Shuffled, memory-mapped backend ---");
    let weights = fit(&external, 0.05)?;
    println!("learned weights: {:?}", weights);

    for t in 1..=3 {
        let point = external.get_data_point(t)?;
        println!("t={t}: row {} label {:.3}", point.row_index(), point.label());
    }
    drop(external);
    drop(mapped);
    let _ = std::fs::remove_file(&path);
    Ok(())
}

// Plain least-squares SGD over the planned iterations.
fn fit<S: sgdrust_core::ColumnMajorStorage>(
    data: &DataSet<'_, S>,
    learning_rate: f64,
) -> Result<Vec<f64>, SgdRustError> {
    let mut w = vec![0.0; data.n_features()];
    for point in data.stream() {
        let point = point?;
        let pred: f64 = point.features().iter().zip(&w).map(|(a, b)| a * b).sum();
        let err = pred - point.label();
        for (wj, xj) in w.iter_mut().zip(point.features()) {
            *wj -= learning_rate * err * xj;
        }
    }
    Ok(w)
}
