use serde::Serialize;

/// The four scalar scores produced for one set of predictions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreSet {
    pub accuracy: f64,
    pub f1: f64,
    pub recall: f64,
    pub precision: f64,
}
