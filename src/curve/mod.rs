pub mod binarize;
pub mod pr;

pub use binarize::binarize;
pub use pr::precision_recall_curve;

use crate::error::EvalError;
use crate::model::{IndicatorMatrix, Labels, PrCurve};

/// Micro-average precision-recall curve for one confidence matrix against
/// a binarized label matrix. Both are flattened row-major so every
/// (sample, class) cell is treated as an independent binary decision.
pub fn curve_for(
    label_matrix: &IndicatorMatrix,
    confidence: &[Vec<f64>],
) -> Result<PrCurve, EvalError> {
    let conf_rows = confidence.len();
    let conf_cols = confidence.first().map(|r| r.len()).unwrap_or(0);
    for (i, row) in confidence.iter().enumerate() {
        if row.len() != conf_cols {
            return Err(EvalError::RaggedMatrix {
                row: i,
                expected: conf_cols,
                found: row.len(),
            });
        }
    }
    if conf_rows != label_matrix.rows || conf_cols != label_matrix.cols {
        return Err(EvalError::ShapeMismatch {
            label_rows: label_matrix.rows,
            label_cols: label_matrix.cols,
            conf_rows,
            conf_cols,
        });
    }

    let flat: Vec<f64> = confidence.iter().flat_map(|r| r.iter().copied()).collect();
    precision_recall_curve(label_matrix.values(), &flat)
}

/// Curves for a batch of confidence matrices over shared ground truth.
///
/// The labels are binarized exactly once, so every matrix in the batch is
/// scored against the same class ordering. Results preserve input order.
pub fn compute_curves(
    labels: &Labels,
    confidences: &[Vec<Vec<f64>>],
    classes: Option<&[i64]>,
) -> Result<Vec<PrCurve>, EvalError> {
    let label_matrix = binarize(labels, classes)?;
    confidences
        .iter()
        .map(|confidence| curve_for(&label_matrix, confidence))
        .collect()
}
