use rand::rngs::StdRng;
use rand::SeedableRng;
use sgdrust_core::DenseMatrix;

// Shared fixtures; not every test binary uses all of them.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Seeded random features and 0/1 labels.
#[allow(dead_code)]
pub fn synthetic(n_samples: usize, n_features: usize, seed: u64) -> (DenseMatrix, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x = DenseMatrix::random_normal(n_samples, n_features, &mut rng)
        .expect("Test matrix creation failed");
    let labels = (0..n_samples).map(|i| (i % 2) as f64).collect();
    (x, labels)
}
