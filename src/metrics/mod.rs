use std::collections::BTreeSet;

pub mod confusion;

pub use confusion::ConfusionMatrix;

use confusion::harmonic;

use crate::error::EvalError;
use crate::model::{Average, ScoreSet};

/// Score predictions against ground truth.
///
/// Accuracy is the exact fraction of matching positions; precision, recall,
/// and F1 are collapsed to scalars by `average`. Classes are the sorted
/// distinct values observed across both inputs.
pub fn compute_scores<L>(
    labels: &[L],
    predictions: &[L],
    average: Average,
) -> Result<ScoreSet, EvalError>
where
    L: Ord + Clone,
{
    if labels.is_empty() {
        return Err(EvalError::EmptyInput("labels"));
    }
    if labels.len() != predictions.len() {
        return Err(EvalError::LengthMismatch {
            labels: labels.len(),
            predictions: predictions.len(),
        });
    }

    let classes: Vec<L> = labels
        .iter()
        .chain(predictions.iter())
        .collect::<BTreeSet<&L>>()
        .into_iter()
        .cloned()
        .collect();

    let y_true = encode(labels, &classes);
    let y_pred = encode(predictions, &classes);
    let cm = ConfusionMatrix::from_labels(&y_true, &y_pred, classes.len());

    let (precision, recall, f1) = match average {
        Average::Binary => {
            if classes.len() > 2 {
                return Err(EvalError::InvalidParameter(format!(
                    "average=binary requires at most two distinct classes, found {}",
                    classes.len()
                )));
            }
            // the greater class in sort order is the positive one
            let pos = classes.len() - 1;
            (cm.precision(pos), cm.recall(pos), cm.f1(pos))
        }
        Average::Micro => micro_averages(&cm),
        Average::Macro => macro_averages(&cm),
        Average::Weighted => weighted_averages(&cm),
        Average::Samples => {
            return Err(EvalError::InvalidParameter(
                "average=samples requires multilabel indicator input".to_string(),
            ));
        }
    };

    Ok(ScoreSet {
        accuracy: cm.accuracy(),
        f1,
        recall,
        precision,
    })
}

fn encode<L: Ord>(values: &[L], classes: &[L]) -> Vec<usize> {
    values
        .iter()
        .filter_map(|v| classes.binary_search(v).ok())
        .collect()
}

fn micro_averages(cm: &ConfusionMatrix) -> (f64, f64, f64) {
    let mut tp = 0.0;
    let mut fp = 0.0;
    let mut fn_ = 0.0;
    for class in 0..cm.n_classes() {
        tp += cm.true_positives(class) as f64;
        fp += cm.false_positives(class) as f64;
        fn_ += cm.false_negatives(class) as f64;
    }
    let p = if tp + fp > 0.0 { tp / (tp + fp) } else { 0.0 };
    let r = if tp + fn_ > 0.0 { tp / (tp + fn_) } else { 0.0 };
    (p, r, harmonic(p, r))
}

fn macro_averages(cm: &ConfusionMatrix) -> (f64, f64, f64) {
    let n = cm.n_classes();
    if n == 0 {
        return (0.0, 0.0, 0.0);
    }
    let mut p = 0.0;
    let mut r = 0.0;
    let mut f = 0.0;
    for class in 0..n {
        p += cm.precision(class);
        r += cm.recall(class);
        f += cm.f1(class);
    }
    (p / n as f64, r / n as f64, f / n as f64)
}

fn weighted_averages(cm: &ConfusionMatrix) -> (f64, f64, f64) {
    let total: usize = (0..cm.n_classes()).map(|c| cm.support(c)).sum();
    if total == 0 {
        return (0.0, 0.0, 0.0);
    }
    let mut p = 0.0;
    let mut r = 0.0;
    let mut f = 0.0;
    for class in 0..cm.n_classes() {
        let weight = cm.support(class) as f64;
        p += cm.precision(class) * weight;
        r += cm.recall(class) * weight;
        f += cm.f1(class) * weight;
    }
    let total = total as f64;
    (p / total, r / total, f / total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_predictions_score_one_everywhere() {
        let labels = vec![0, 1, 2, 0, 1, 2];
        let scores = compute_scores(&labels, &labels, Average::Macro).unwrap();
        assert_eq!(scores.accuracy, 1.0);
        assert_eq!(scores.f1, 1.0);
        assert_eq!(scores.recall, 1.0);
        assert_eq!(scores.precision, 1.0);
    }

    #[test]
    fn test_accuracy_is_matching_fraction() {
        let scores = compute_scores(&[0, 1, 1, 0], &[0, 1, 0, 1], Average::Macro).unwrap();
        assert!((scores.accuracy - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_all_scores_stay_in_unit_interval() {
        let labels = vec![0, 2, 1, 2, 0, 1, 1];
        let predictions = vec![1, 2, 1, 0, 0, 2, 1];
        for average in [Average::Micro, Average::Macro, Average::Weighted] {
            let s = compute_scores(&labels, &predictions, average).unwrap();
            for v in [s.accuracy, s.f1, s.recall, s.precision] {
                assert!((0.0..=1.0).contains(&v), "{average}: {v} out of range");
            }
        }
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let err = compute_scores(&[0, 1], &[0], Average::Macro).unwrap_err();
        assert!(matches!(
            err,
            EvalError::LengthMismatch {
                labels: 2,
                predictions: 1
            }
        ));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = compute_scores::<i64>(&[], &[], Average::Macro).unwrap_err();
        assert!(matches!(err, EvalError::EmptyInput(_)));
    }

    #[test]
    fn test_binary_rejects_three_classes() {
        let err = compute_scores(&[0, 1, 2], &[0, 1, 2], Average::Binary).unwrap_err();
        assert!(matches!(err, EvalError::InvalidParameter(_)));
    }

    #[test]
    fn test_samples_is_rejected_for_class_vectors() {
        let err = compute_scores(&[0, 1], &[0, 1], Average::Samples).unwrap_err();
        assert!(matches!(err, EvalError::InvalidParameter(_)));
    }

    #[test]
    fn test_idempotent_on_identical_inputs() {
        let labels = vec![0, 1, 2, 0, 1, 2, 0, 1, 2];
        let predictions = vec![0, 1, 1, 2, 1, 2, 0, 0, 2];
        let a = compute_scores(&labels, &predictions, Average::Weighted).unwrap();
        let b = compute_scores(&labels, &predictions, Average::Weighted).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_string_labels_are_accepted() {
        let labels = vec!["cat", "dog", "cat"];
        let predictions = vec!["cat", "dog", "dog"];
        let scores = compute_scores(&labels, &predictions, Average::Micro).unwrap();
        assert!((scores.accuracy - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_binary_positive_class_is_greater_label() {
        // positive class 1: TP=2, FP=0, FN=1
        let labels = vec![0, 1, 1, 1];
        let predictions = vec![0, 1, 1, 0];
        let scores = compute_scores(&labels, &predictions, Average::Binary).unwrap();
        assert!((scores.precision - 1.0).abs() < 1e-12);
        assert!((scores.recall - 2.0 / 3.0).abs() < 1e-12);
        assert!((scores.f1 - 0.8).abs() < 1e-12);
    }
}
