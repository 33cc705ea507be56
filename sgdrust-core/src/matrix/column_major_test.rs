// sgdrust-core/src/matrix/column_major_test.rs

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_column_major_new_and_get() {
    // 3 rows x 2 cols, column-major: col0 = [1, 3, 5], col1 = [2, 4, 6]
    let m = ColumnMajorMatrix::new(vec![1.0, 3.0, 5.0, 2.0, 4.0, 6.0], 3, 2).unwrap();
    assert_eq!(m.nrow(), 3);
    assert_eq!(m.ncol(), 2);
    assert_eq!(m.get(0, 0).unwrap(), 1.0);
    assert_eq!(m.get(1, 0).unwrap(), 2.0);
    assert_eq!(m.get(0, 2).unwrap(), 5.0);
    assert_eq!(m.get(1, 2).unwrap(), 6.0);
}

#[test]
fn test_column_major_new_length_mismatch() {
    let err = ColumnMajorMatrix::new(vec![1i32, 2, 3], 2, 2).unwrap_err();
    assert!(matches!(
        err,
        SgdRustError::DimensionMismatch { expected: 4, actual: 3, .. }
    ));
}

#[test]
fn test_column_major_get_out_of_range() {
    let m = ColumnMajorMatrix::new(vec![1.0f32, 2.0], 2, 1).unwrap();
    assert_eq!(
        m.get(1, 0).unwrap_err(),
        SgdRustError::IndexOutOfRange { index: 1, len: 1 }
    );
    assert_eq!(
        m.get(0, 2).unwrap_err(),
        SgdRustError::IndexOutOfRange { index: 2, len: 2 }
    );
}

#[test]
fn test_column_major_from_dense_transposes_layout() {
    let dense = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
    let cm = ColumnMajorMatrix::from_dense(&dense);
    let expected = ColumnMajorMatrix::new(vec![1.0, 3.0, 5.0, 2.0, 4.0, 6.0], 3, 2).unwrap();
    assert_eq!(cm, expected);
    for i in 0..3 {
        for j in 0..2 {
            assert_eq!(cm.get(j, i).unwrap(), dense.get(i, j).unwrap());
        }
    }
}

#[test]
fn test_column_major_narrow_element_converts() {
    let m = ColumnMajorMatrix::new(vec![0.1f32, 7.0f32], 1, 2).unwrap();
    let v = m.get(0, 0).unwrap().to_f64().unwrap();
    assert_relative_eq!(v, 0.1, epsilon = 1e-7);
    let m = ColumnMajorMatrix::new(vec![-3i16, 12], 2, 1).unwrap();
    assert_eq!(m.get(0, 1).unwrap().to_f64(), Some(12.0));
}
