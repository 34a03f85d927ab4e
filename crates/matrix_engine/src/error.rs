// =============================================================================
// DenseQ Reference Simulator - Matrix Engine Error Types
// =============================================================================
// Table of Contents:
//   1. MatrixError - Matrix-level error enum
//   2. MatrixResult - Result type alias
// =============================================================================
// Purpose: Typed failures for the dense complex matrix engine. Every
//          precondition violation surfaces as an error value before any
//          mutation takes place; the engine never panics on a library path.
// =============================================================================

use thiserror::Error;

// =============================================================================
// 1. MatrixError - Matrix-level error enum
// =============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Index out of range: ({row}, {column}) for a {rows}x{columns} matrix")]
    IndexOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

// =============================================================================
// 2. MatrixResult - Result type alias
// =============================================================================

pub type MatrixResult<T> = Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MatrixError::DimensionMismatch("2x3 by 4x2".to_string());
        assert!(err.to_string().contains("2x3 by 4x2"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = MatrixError::IndexOutOfRange {
            row: 2,
            column: 0,
            rows: 2,
            columns: 2,
        };
        assert!(err.to_string().contains("(2, 0)"));
        assert!(err.to_string().contains("2x2"));
    }
}
