//! Deterministic classification scoring: accuracy/precision/recall/F1 over
//! label vectors, micro-averaged precision-recall curves over confidence
//! matrices, and text/JSON/chart report rendering.

pub mod chart;
pub mod curve;
pub mod error;
pub mod input;
pub mod metrics;
pub mod model;
pub mod report;

pub use crate::curve::{binarize, compute_curves, curve_for, precision_recall_curve};
pub use crate::error::EvalError;
pub use crate::metrics::compute_scores;
pub use crate::model::{Average, IndicatorMatrix, Labels, PrCurve, ScoreSet, SparseIndicator};
