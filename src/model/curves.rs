use serde::Serialize;

/// A micro-averaged precision-recall curve for one confidence matrix.
///
/// `precision` and `recall` are one element longer than `thresholds`: the
/// curve is closed at (recall 0, precision 1), and `thresholds` holds the
/// distinct decision scores in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrCurve {
    pub precision: Vec<f64>,
    pub recall: Vec<f64>,
    pub thresholds: Vec<f64>,
    pub average_precision: f64,
}
