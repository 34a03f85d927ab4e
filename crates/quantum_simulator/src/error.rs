// =============================================================================
// DenseQ Reference Simulator - Unified Error Types
// =============================================================================
// Table of Contents:
//   1. SimulationError - Main error enum
//   2. SimulationResult - Result type alias
// =============================================================================
// Purpose: Unified error taxonomy for the simulator layer. Matrix-level
//          failures bridge in through `#[from]`; every variant is an
//          immediate, non-retryable precondition violation raised before
//          any state mutation takes place.
// =============================================================================

use matrix_engine::MatrixError;
use thiserror::Error;

// =============================================================================
// 1. SimulationError - Main error enum
// =============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Invalid state vector: length {length} is not a power of two of at least 2")]
    InvalidStateVector { length: usize },

    #[error(
        "Unnormalized state: squared amplitude sum {norm_squared} deviates from 1 by more than {tolerance}"
    )]
    UnnormalizedState { norm_squared: f64, tolerance: f64 },

    #[error("Invalid qubit count: {0} (must be between 1 and 63)")]
    InvalidQubitCount(usize),

    #[error("Invalid qubit index {index}: register has {total} qubits")]
    InvalidQubitIndex { index: usize, total: usize },

    #[error("Index {index} out of range: state vector has dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },

    #[error("Invalid gate matrix: dimension {dimension} is not a power of two of at least 2")]
    InvalidGateMatrix { dimension: usize },
}

// =============================================================================
// 2. SimulationResult - Result type alias
// =============================================================================

pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_error_bridging() {
        let matrix_err = MatrixError::DimensionMismatch("2x3 by 4x2".to_string());
        let simulation_err: SimulationError = matrix_err.into();
        assert!(matches!(simulation_err, SimulationError::Matrix(_)));
    }

    #[test]
    fn test_invalid_qubit_index_display() {
        let err = SimulationError::InvalidQubitIndex { index: 5, total: 3 };
        assert!(err.to_string().contains("5"));
        assert!(err.to_string().contains("3"));
    }
}
