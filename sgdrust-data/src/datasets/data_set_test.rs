// sgdrust-data/src/datasets/data_set_test.rs

use super::*;
use sgdrust_core::DenseMatrix;

fn sample_matrix() -> DenseMatrix {
    DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap()
}

fn sample_labels() -> Vec<f64> {
    vec![0.0, 1.0, 0.0]
}

#[test]
fn test_data_set_sequential_scenario() {
    let x = sample_matrix();
    let data = DataSet::new(Backend::dense(&x), sample_labels(), DataSetConfig::default()).unwrap();

    let first = data.get_data_point(1).unwrap();
    assert_eq!(first.features(), &[1.0, 2.0]);
    assert_eq!(first.label(), 0.0);
    assert_eq!(first.row_index(), 0);

    assert_eq!(data.get_data_point(4).unwrap(), first);
    assert_eq!(data.get_data_point(2).unwrap().label(), 1.0);
    assert_eq!(data.get_data_point(6).unwrap().features(), &[5.0, 6.0]);
}

#[test]
fn test_data_set_accessors() {
    let x = sample_matrix();
    let config = DataSetConfig::default().with_passes(2.5);
    let data = DataSet::new(Backend::dense(&x), sample_labels(), config).unwrap();
    assert_eq!(data.n_samples(), 3);
    assert_eq!(data.n_features(), 2);
    assert_eq!(data.n_passes(), 2.5);
    assert_eq!(data.planned_iterations(), Some(8));
    assert_eq!(data.sampling_mode(), SamplingMode::Sequential);
    assert!(!data.is_out_of_core());
    assert_eq!(data.labels(), &[0.0, 1.0, 0.0]);
    assert_eq!(data.shuffled_indices(), None);
    assert_eq!(data.len(), 3);
    assert!(!data.is_empty());
}

#[test]
fn test_data_set_sequential_never_fails_past_planned() {
    let x = sample_matrix();
    let config = DataSetConfig::default().with_passes(1.0);
    let data = DataSet::new(Backend::dense(&x), sample_labels(), config).unwrap();
    assert_eq!(data.get_data_point(1000).unwrap().row_index(), 999 % 3);
}

#[test]
fn test_data_set_iteration_zero_fails() {
    let x = sample_matrix();
    let data = DataSet::new(Backend::dense(&x), sample_labels(), DataSetConfig::default()).unwrap();
    assert!(matches!(
        data.get_data_point(0).unwrap_err(),
        SgdRustError::IndexOutOfRange { index: 0, .. }
    ));
}

#[test]
fn test_data_set_shuffled_scenario() {
    let x = sample_matrix();
    let config = DataSetConfig::default().with_passes(2.0).shuffled();
    let mut rng = StdRng::seed_from_u64(17);
    let data = DataSet::with_rng(Backend::dense(&x), sample_labels(), config, &mut rng).unwrap();

    let indices = data.shuffled_indices().unwrap().to_vec();
    assert_eq!(indices.len(), 6);
    assert!(indices.iter().all(|&i| i < 3));
    for (p, &row) in indices.iter().enumerate() {
        let point = data.get_data_point(p + 1).unwrap();
        assert_eq!(point.row_index(), row);
        assert_eq!(point.features(), x.row(row).unwrap());
        assert_eq!(point.label(), sample_labels()[row]);
    }
    assert_eq!(
        data.get_data_point(7).unwrap_err(),
        SgdRustError::IndexOutOfRange { index: 7, len: 6 }
    );
}

#[test]
fn test_data_set_shuffled_zero_passes_always_fails() {
    let x = sample_matrix();
    let config = DataSetConfig::default().with_passes(0.0).shuffled();
    let data = DataSet::new(Backend::dense(&x), sample_labels(), config).unwrap();
    assert_eq!(data.shuffled_indices().map(<[usize]>::len), Some(0));
    assert_eq!(
        data.get_data_point(1).unwrap_err(),
        SgdRustError::IndexOutOfRange { index: 1, len: 0 }
    );
}

#[test]
fn test_data_set_label_length_mismatch() {
    let x = sample_matrix();
    let err = DataSet::new(Backend::dense(&x), vec![0.0, 1.0], DataSetConfig::default()).unwrap_err();
    match err {
        SgdRustError::DimensionMismatch { expected, actual, .. } => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        _ => panic!("Expected DimensionMismatch error"),
    }
}

#[test]
fn test_data_set_declared_feature_mismatch() {
    let x = sample_matrix();
    let config = DataSetConfig::default().with_features(3);
    let err = DataSet::new(Backend::dense(&x), sample_labels(), config).unwrap_err();
    assert!(matches!(
        err,
        SgdRustError::DimensionMismatch { expected: 3, actual: 2, .. }
    ));

    let config = DataSetConfig::default().with_features(2);
    assert!(DataSet::new(Backend::dense(&x), sample_labels(), config).is_ok());
}

#[test]
fn test_data_set_empty_backend() {
    let no_rows = DenseMatrix::new(vec![], 0, 2).unwrap();
    let err = DataSet::new(Backend::dense(&no_rows), vec![], DataSetConfig::default()).unwrap_err();
    assert!(matches!(err, SgdRustError::EmptyData { .. }));

    let no_cols = DenseMatrix::new(vec![], 2, 0).unwrap();
    let err = DataSet::new(Backend::dense(&no_cols), vec![0.0, 1.0], DataSetConfig::default())
        .unwrap_err();
    assert!(matches!(err, SgdRustError::EmptyData { .. }));
}

#[test]
fn test_data_set_sequential_accepts_unbounded_passes() {
    let x = sample_matrix();
    for n_passes in [f64::INFINITY, 1e300] {
        let config = DataSetConfig::default().with_passes(n_passes);
        let data = DataSet::new(Backend::dense(&x), sample_labels(), config).unwrap();
        assert_eq!(data.n_passes(), n_passes);
        assert_eq!(data.planned_iterations(), None);
        assert_eq!(data.get_data_point(4).unwrap().row_index(), 0);
    }
}

#[test]
fn test_data_set_invalid_passes() {
    let x = sample_matrix();
    for config in [
        DataSetConfig::default().with_passes(-1.0),
        DataSetConfig::default().with_passes(f64::NAN),
        DataSetConfig::default().with_passes(f64::NAN).shuffled(),
        DataSetConfig::default().with_passes(f64::INFINITY).shuffled(),
        DataSetConfig::default().with_passes(1e300).shuffled(),
    ] {
        assert!(matches!(
            DataSet::new(Backend::dense(&x), sample_labels(), config).unwrap_err(),
            SgdRustError::InvalidArgument(_)
        ));
    }
}

#[test]
fn test_data_set_get_by_physical_row() {
    let x = sample_matrix();
    let data = DataSet::new(Backend::dense(&x), sample_labels(), DataSetConfig::default()).unwrap();
    let point = data.get(2).unwrap();
    assert_eq!(point.into_parts(), (vec![5.0, 6.0], 0.0, 2));
    assert_eq!(
        data.get(3).unwrap_err(),
        SgdRustError::IndexOutOfRange { index: 3, len: 3 }
    );
}

#[test]
fn test_data_set_out_of_core_backend() {
    let x = sample_matrix();
    let storage = ColumnMajorMatrix::from_dense(&x);
    let data = DataSet::new(Backend::out_of_core(&storage), sample_labels(), DataSetConfig::default())
        .unwrap();
    assert!(data.is_out_of_core());
    assert_eq!(data.get_data_point(3).unwrap().features(), &[5.0, 6.0]);
}
