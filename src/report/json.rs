use serde::Serialize;

use crate::error::EvalError;
use crate::report::{CurveEntry, RunSummary};

/// Top-level JSON summary document.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub tool: String,
    pub version: String,
    pub average_mode: String,
    pub n_samples: usize,
    pub n_models: usize,
    pub runs: Vec<RunSummary>,
}

pub fn render_summary_json(report: &SummaryReport) -> Result<String, EvalError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_curves_json(entries: &[CurveEntry]) -> Result<String, EvalError> {
    Ok(serde_json::to_string_pretty(entries)?)
}
