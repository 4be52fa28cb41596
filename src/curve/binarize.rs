use std::collections::BTreeSet;

use crate::error::EvalError;
use crate::model::{IndicatorMatrix, Labels};

/// Normalize ground-truth labels into a dense 0/1 indicator matrix.
///
/// Sparse input is densified and dense indicator input passes through
/// unchanged. A class vector whose values are all 0 or 1 is already binary
/// and is kept untouched as a single indicator column. Anything else is
/// one-hot binarized; the column ordering is the explicit `classes` list
/// when it covers at least the observed distinct values, else the sorted
/// observed distinct values.
pub fn binarize(labels: &Labels, classes: Option<&[i64]>) -> Result<IndicatorMatrix, EvalError> {
    match labels {
        Labels::Indicator(matrix) => {
            if matrix.rows == 0 {
                return Err(EvalError::EmptyInput("label matrix"));
            }
            Ok(matrix.clone())
        }
        Labels::Sparse(sparse) => sparse.to_dense(),
        Labels::Classes(values) => binarize_classes(values, classes),
    }
}

fn binarize_classes(values: &[i64], classes: Option<&[i64]>) -> Result<IndicatorMatrix, EvalError> {
    if values.is_empty() {
        return Err(EvalError::EmptyInput("labels"));
    }

    let observed: Vec<i64> = values.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
    if observed.iter().all(|v| *v == 0 || *v == 1) {
        let data = values.iter().map(|v| *v as u8).collect();
        return Ok(IndicatorMatrix {
            rows: values.len(),
            cols: 1,
            data,
        });
    }

    let ordering: Vec<i64> = match classes {
        Some(explicit) if explicit.len() >= observed.len() => explicit.to_vec(),
        _ => observed,
    };
    Ok(one_hot(values, &ordering))
}

fn one_hot(values: &[i64], ordering: &[i64]) -> IndicatorMatrix {
    if ordering.len() == 2 {
        // two classes collapse to one column marking the second class
        let data = values.iter().map(|v| u8::from(*v == ordering[1])).collect();
        return IndicatorMatrix {
            rows: values.len(),
            cols: 1,
            data,
        };
    }
    let cols = ordering.len();
    let mut data = vec![0u8; values.len() * cols];
    for (row, value) in values.iter().enumerate() {
        if let Some(col) = ordering.iter().position(|c| c == value) {
            data[row * cols + col] = 1;
        }
    }
    IndicatorMatrix {
        rows: values.len(),
        cols,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SparseIndicator;

    #[test]
    fn test_already_binary_labels_pass_through() {
        let matrix = binarize(&Labels::Classes(vec![0, 1, 1, 0]), None).unwrap();
        assert_eq!(matrix.cols, 1);
        assert_eq!(matrix.values(), &[0, 1, 1, 0]);
    }

    #[test]
    fn test_multiclass_one_hot_uses_sorted_observed_classes() {
        let matrix = binarize(&Labels::Classes(vec![2, 0, 1]), None).unwrap();
        assert_eq!((matrix.rows, matrix.cols), (3, 3));
        assert_eq!(matrix.values(), &[0, 0, 1, 1, 0, 0, 0, 1, 0]);
    }

    #[test]
    fn test_explicit_classes_order_columns() {
        let matrix = binarize(&Labels::Classes(vec![2, 0, 1]), Some(&[2, 1, 0])).unwrap();
        assert_eq!(matrix.values(), &[1, 0, 0, 0, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_short_explicit_class_list_falls_back_to_observed() {
        let matrix = binarize(&Labels::Classes(vec![0, 1, 2]), Some(&[0, 1])).unwrap();
        assert_eq!((matrix.rows, matrix.cols), (3, 3));
        assert_eq!(matrix.values(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_two_class_labels_collapse_to_one_column() {
        let matrix = binarize(&Labels::Classes(vec![3, 7, 7, 3]), None).unwrap();
        assert_eq!(matrix.cols, 1);
        assert_eq!(matrix.values(), &[0, 1, 1, 0]);
    }

    #[test]
    fn test_labels_outside_ordering_get_zero_rows() {
        let matrix = binarize(&Labels::Classes(vec![0, 5, 9]), Some(&[0, 5, 7])).unwrap();
        assert_eq!(matrix.values(), &[1, 0, 0, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_empty_labels_are_rejected() {
        assert!(matches!(
            binarize(&Labels::Classes(Vec::new()), None).unwrap_err(),
            EvalError::EmptyInput(_)
        ));
    }

    #[test]
    fn test_sparse_labels_densify() {
        let sparse = Labels::Sparse(SparseIndicator {
            rows: 2,
            cols: 2,
            entries: vec![(0, 0), (1, 1)],
        });
        let matrix = binarize(&sparse, None).unwrap();
        assert_eq!(matrix.values(), &[1, 0, 0, 1]);
    }
}
