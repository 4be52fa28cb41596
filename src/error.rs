/// Errors returned by evalscore operations.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// Two parallel sequences were not the same length.
    #[error("length mismatch: labels has {labels} entries, predictions has {predictions}")]
    LengthMismatch { labels: usize, predictions: usize },

    /// A confidence matrix did not match the binarized label matrix.
    #[error(
        "shape mismatch: label matrix is {label_rows}x{label_cols} but confidence matrix is {conf_rows}x{conf_cols}"
    )]
    ShapeMismatch {
        label_rows: usize,
        label_cols: usize,
        conf_rows: usize,
        conf_cols: usize,
    },

    /// A matrix row had the wrong number of columns.
    #[error("shape mismatch: row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A parameter failed validation.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An input that must be non-empty was empty.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// An I/O error occurred while reading an input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input file could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
