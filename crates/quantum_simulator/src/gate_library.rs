// =============================================================================
// DenseQ Reference Simulator - Gate Library
// =============================================================================
// Table of Contents:
//   1. QuantumGate - Matrix-backed reusable gate operator
//   2. Standard gate table - Read-only process-wide singletons
//   3. Name lookup
// =============================================================================
// Purpose: Wraps a square complex matrix as a reusable gate operator and
//          provides the fixed library of standard gates. Standard gates are
//          constructed once, never mutated afterwards, and safe to share
//          (read-only) across threads.
// =============================================================================

use lazy_static::lazy_static;
use matrix_engine::{ComplexMatrix, MatrixError};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{SimulationError, SimulationResult};
use crate::gate_application::{apply_full_register_gate, apply_single_qubit_gate};
use crate::state_vector::QuantumStateVector;

// =============================================================================
// 1. QuantumGate - Matrix-backed reusable gate operator
// =============================================================================

/// A k-qubit gate holds a square `2^k x 2^k` matrix. Unitarity is a semantic
/// expectation of the caller, not enforced here; the matrix never changes
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumGate {
    name: String,
    matrix: ComplexMatrix,
}

impl QuantumGate {
    pub fn new(name: impl Into<String>, matrix: ComplexMatrix) -> SimulationResult<Self> {
        if !matrix.is_square() {
            return Err(SimulationError::Matrix(MatrixError::DimensionMismatch(
                format!(
                    "gate matrix must be square, got {}x{}",
                    matrix.rows(),
                    matrix.columns()
                ),
            )));
        }
        let dimension = matrix.rows();
        if dimension < 2 || !dimension.is_power_of_two() {
            return Err(SimulationError::InvalidGateMatrix { dimension });
        }
        Ok(Self {
            name: name.into(),
            matrix,
        })
    }

    pub fn gate_name(&self) -> &str {
        &self.name
    }

    pub fn matrix(&self) -> &ComplexMatrix {
        &self.matrix
    }

    pub fn number_of_gate_qubits(&self) -> usize {
        self.matrix.rows().trailing_zeros() as usize
    }

    /// Applies this gate to the register. Single-qubit gates are embedded at
    /// `target_qubit_index`; wider gates must already span the whole register
    /// and ignore the target index.
    pub fn apply(
        &self,
        state: &mut QuantumStateVector,
        target_qubit_index: usize,
    ) -> SimulationResult<()> {
        if self.number_of_gate_qubits() == 1 {
            apply_single_qubit_gate(state, self, target_qubit_index)
        } else {
            apply_full_register_gate(state, self)
        }
    }
}

// =============================================================================
// 2. Standard gate table
// =============================================================================

/// Standard gate matrices are literal constants with known-good shapes, so
/// construction cannot fail here.
fn standard_gate(name: &str, size: usize, entries: Vec<Complex64>) -> QuantumGate {
    let matrix = ComplexMatrix::new(size, size, entries)
        .expect("standard gate matrix literal has a valid shape");
    QuantumGate::new(name, matrix).expect("standard gate matrix literal is a valid gate")
}

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

lazy_static! {
    pub static ref IDENTITY_GATE: QuantumGate = standard_gate(
        "identity_gate",
        2,
        vec![c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
    );

    pub static ref PAULI_X_GATE: QuantumGate = standard_gate(
        "pauli_x_gate",
        2,
        vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
    );

    pub static ref PAULI_Y_GATE: QuantumGate = standard_gate(
        "pauli_y_gate",
        2,
        vec![c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0)],
    );

    pub static ref PAULI_Z_GATE: QuantumGate = standard_gate(
        "pauli_z_gate",
        2,
        vec![c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)],
    );

    pub static ref HADAMARD_GATE: QuantumGate = {
        let inv_sqrt2 = 1.0 / std::f64::consts::SQRT_2;
        standard_gate(
            "hadamard_gate",
            2,
            vec![
                c(inv_sqrt2, 0.0),
                c(inv_sqrt2, 0.0),
                c(inv_sqrt2, 0.0),
                c(-inv_sqrt2, 0.0),
            ],
        )
    };

    /// Control is qubit 0 of the pair (most significant basis bit).
    pub static ref CNOT_GATE: QuantumGate = standard_gate(
        "controlled_not_gate",
        4,
        vec![
            c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0),
            c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0),
            c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0),
            c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0),
        ],
    );
}

// =============================================================================
// 3. Name lookup
// =============================================================================

pub fn standard_gate_by_name(name: &str) -> Option<&'static QuantumGate> {
    match name {
        "identity_gate" => Some(&IDENTITY_GATE),
        "pauli_x_gate" => Some(&PAULI_X_GATE),
        "pauli_y_gate" => Some(&PAULI_Y_GATE),
        "pauli_z_gate" => Some(&PAULI_Z_GATE),
        "hadamard_gate" => Some(&HADAMARD_GATE),
        "controlled_not_gate" => Some(&CNOT_GATE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_requires_square_matrix() {
        let rectangular = ComplexMatrix::zeros(2, 4);
        assert!(matches!(
            QuantumGate::new("bad_gate", rectangular),
            Err(SimulationError::Matrix(_))
        ));
    }

    #[test]
    fn test_gate_requires_power_of_two_dimension() {
        let three_by_three = ComplexMatrix::identity(3);
        assert!(matches!(
            QuantumGate::new("bad_gate", three_by_three),
            Err(SimulationError::InvalidGateMatrix { dimension: 3 })
        ));
    }

    #[test]
    fn test_standard_gates_are_unitary() {
        for name in [
            "identity_gate",
            "pauli_x_gate",
            "pauli_y_gate",
            "pauli_z_gate",
            "hadamard_gate",
            "controlled_not_gate",
        ] {
            let gate = standard_gate_by_name(name).expect("standard gate exists");
            assert!(
                gate.matrix().is_approximately_unitary(1e-10),
                "{name} should be unitary"
            );
        }
    }

    #[test]
    fn test_gate_qubit_counts() {
        assert_eq!(HADAMARD_GATE.number_of_gate_qubits(), 1);
        assert_eq!(CNOT_GATE.number_of_gate_qubits(), 2);
    }

    #[test]
    fn test_unknown_gate_name() {
        assert!(standard_gate_by_name("toffoli_gate").is_none());
    }
}
