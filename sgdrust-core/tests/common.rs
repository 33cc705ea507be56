use sgdrust_core::DenseMatrix;

// Shared fixtures for the integration tests in this directory.
// Each test binary uses a different subset, hence allow(dead_code).
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn sample_matrix() -> DenseMatrix {
    DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
        .expect("Test matrix creation failed")
}
