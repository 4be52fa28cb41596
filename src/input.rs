use std::path::Path;

use serde::Deserialize;

use crate::error::EvalError;

/// One evaluation input file: ground truth plus one or more model outputs.
#[derive(Debug, Clone, Deserialize)]
pub struct EvalInput {
    pub labels: Vec<i64>,
    pub models: Vec<ModelOutput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelOutput {
    pub name: String,
    pub predictions: Vec<i64>,
    #[serde(default)]
    pub confidence: Option<Vec<Vec<f64>>>,
}

pub fn load_input(path: &Path) -> Result<EvalInput, EvalError> {
    let raw = std::fs::read_to_string(path)?;
    let input: EvalInput = serde_json::from_str(&raw)?;
    if input.labels.is_empty() {
        return Err(EvalError::EmptyInput("labels"));
    }
    if input.models.is_empty() {
        return Err(EvalError::EmptyInput("models"));
    }
    tracing::info!(
        path = %path.display(),
        models = input.models.len(),
        samples = input.labels.len(),
        "loaded evaluation input"
    );
    Ok(input)
}
