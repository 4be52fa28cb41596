use std::fmt;
use std::str::FromStr;

use crate::error::EvalError;

/// Averaging strategy collapsing per-class precision/recall/F1 to a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Average {
    /// Report the positive class only; at most two distinct classes.
    Binary,
    /// Count total TP, FP, FN across all classes.
    Micro,
    /// Unweighted mean of per-class values.
    Macro,
    /// Mean of per-class values weighted by support.
    Weighted,
    /// Samplewise mean; only defined for multilabel indicator input.
    Samples,
}

impl Average {
    pub fn as_str(&self) -> &'static str {
        match self {
            Average::Binary => "binary",
            Average::Micro => "micro",
            Average::Macro => "macro",
            Average::Weighted => "weighted",
            Average::Samples => "samples",
        }
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Average {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" => Ok(Average::Binary),
            "micro" => Ok(Average::Micro),
            "macro" => Ok(Average::Macro),
            "weighted" => Ok(Average::Weighted),
            "samples" => Ok(Average::Samples),
            other => Err(EvalError::InvalidParameter(format!(
                "unknown averaging mode: {other} (use binary|micro|macro|weighted|samples)"
            ))),
        }
    }
}
