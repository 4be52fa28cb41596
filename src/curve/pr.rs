use crate::error::EvalError;
use crate::model::PrCurve;

/// Precision-recall curve over binary targets and decision scores.
///
/// Sweeps thresholds over the distinct score values in descending order,
/// accumulating TP/FP per group so tie order cannot affect the curve.
/// Outputs are reversed to ascending thresholds and closed with
/// (precision 1, recall 0). When no positive targets exist, recall is 1
/// for every threshold. The uninterpolated average precision
/// `sum((R_i - R_{i-1}) * P_i)` is computed over the same sweep.
pub fn precision_recall_curve(y_true: &[u8], scores: &[f64]) -> Result<PrCurve, EvalError> {
    if y_true.is_empty() {
        return Err(EvalError::EmptyInput("labels"));
    }
    if y_true.len() != scores.len() {
        return Err(EvalError::LengthMismatch {
            labels: y_true.len(),
            predictions: scores.len(),
        });
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut precision = Vec::new();
    let mut true_positives = Vec::new();
    let mut thresholds = Vec::new();
    let mut tp = 0usize;
    let mut fp = 0usize;

    let mut i = 0;
    while i < order.len() {
        let current = scores[order[i]];
        while i < order.len() && scores[order[i]] == current {
            if y_true[order[i]] > 0 {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        let predicted = tp + fp;
        precision.push(if predicted > 0 {
            tp as f64 / predicted as f64
        } else {
            0.0
        });
        true_positives.push(tp);
        thresholds.push(current);
    }

    let total_pos = tp;
    let mut recall: Vec<f64> = if total_pos == 0 {
        vec![1.0; true_positives.len()]
    } else {
        true_positives
            .iter()
            .map(|&t| t as f64 / total_pos as f64)
            .collect()
    };

    let mut average_precision = 0.0;
    let mut prev_recall = 0.0;
    for (p, r) in precision.iter().zip(recall.iter()) {
        average_precision += (r - prev_recall) * p;
        prev_recall = *r;
    }

    precision.reverse();
    recall.reverse();
    thresholds.reverse();
    precision.push(1.0);
    recall.push(0.0);

    Ok(PrCurve {
        precision,
        recall,
        thresholds,
        average_precision,
    })
}
