pub mod average;
pub mod curves;
pub mod labels;
pub mod scores;

pub use average::Average;
pub use curves::PrCurve;
pub use labels::{IndicatorMatrix, Labels, SparseIndicator};
pub use scores::ScoreSet;
