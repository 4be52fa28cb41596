pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::{PrCurve, ScoreSet};

/// Scores for one named model run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub name: String,
    pub scores: ScoreSet,
    pub average_precision: Option<f64>,
}

/// Full curve data for one named model run.
#[derive(Debug, Clone, Serialize)]
pub struct CurveEntry {
    pub name: String,
    pub curve: PrCurve,
}

pub fn format_f64_4(v: f64) -> String {
    format!("{:.4}", v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_f64_4() {
        assert_eq!(format_f64_4(0.97142857), "0.9714");
        assert_eq!(format_f64_4(1.0), "1.0000");
    }
}
