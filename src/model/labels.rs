use serde::Serialize;

use crate::error::EvalError;

/// Ground-truth labels accepted by the curve aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Labels {
    /// One class id per sample.
    Classes(Vec<i64>),
    /// Dense 0/1 indicator matrix, used as-is.
    Indicator(IndicatorMatrix),
    /// Sparse indicator entries, densified before use.
    Sparse(SparseIndicator),
}

/// Row-major 0/1 indicator matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorMatrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<u8>,
}

impl IndicatorMatrix {
    /// Build from row slices; every row must have the same width and only
    /// 0/1 entries.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, EvalError> {
        if rows.is_empty() {
            return Err(EvalError::EmptyInput("label matrix"));
        }
        let cols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(EvalError::RaggedMatrix {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            if row.iter().any(|v| *v > 1) {
                return Err(EvalError::InvalidParameter(format!(
                    "indicator matrix row {i} contains a value other than 0 or 1"
                )));
            }
        }
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Ok(IndicatorMatrix {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.cols + col]
    }

    /// Row-major view of all cells.
    pub fn values(&self) -> &[u8] {
        &self.data
    }
}

/// Coordinate-list form of an indicator matrix: `entries` holds the
/// (row, col) positions of the 1 cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseIndicator {
    pub rows: usize,
    pub cols: usize,
    pub entries: Vec<(usize, usize)>,
}

impl SparseIndicator {
    pub fn to_dense(&self) -> Result<IndicatorMatrix, EvalError> {
        if self.rows == 0 {
            return Err(EvalError::EmptyInput("label matrix"));
        }
        let mut data = vec![0u8; self.rows * self.cols];
        for &(row, col) in &self.entries {
            if row >= self.rows || col >= self.cols {
                return Err(EvalError::InvalidParameter(format!(
                    "sparse entry ({row}, {col}) outside a {}x{} matrix",
                    self.rows, self.cols
                )));
            }
            data[row * self.cols + col] = 1;
        }
        Ok(IndicatorMatrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}
