// =============================================================================
// DenseQ Reference Simulator - Gate Application Engine
// =============================================================================
// Table of Contents:
//   1. Operator expansion - Kronecker embedding of a local gate
//   2. Single-qubit gate application
//   3. Full-register gate application
// =============================================================================
// Purpose: Stateless engine that promotes a local gate to a full 2^n x 2^n
//          operator via repeated tensor products and multiplies it into the
//          state vector. Qubit ordering convention: qubit 0 is the leftmost
//          tensor factor and therefore the MOST significant bit of the basis
//          index. Cost is O(4^n) operator entries and O(8^n) multiply work,
//          which bounds this engine to small registers.
// =============================================================================

use matrix_engine::{ComplexMatrix, MatrixError};

use crate::error::{SimulationError, SimulationResult};
use crate::gate_library::QuantumGate;
use crate::state_vector::QuantumStateVector;

// =============================================================================
// 1. Operator expansion
// =============================================================================

/// Builds the full-register operator for a single-qubit gate: the factor at
/// `target_qubit_index` is the gate matrix, every other factor is a 2x2
/// identity, combined left-to-right with the Kronecker product.
pub fn expand_to_full_operator(
    gate: &QuantumGate,
    number_of_quantum_bits: usize,
    target_qubit_index: usize,
) -> SimulationResult<ComplexMatrix> {
    check_single_qubit_gate(gate)?;
    if number_of_quantum_bits == 0 {
        return Err(SimulationError::InvalidQubitCount(0));
    }
    if target_qubit_index >= number_of_quantum_bits {
        return Err(SimulationError::InvalidQubitIndex {
            index: target_qubit_index,
            total: number_of_quantum_bits,
        });
    }

    let identity = ComplexMatrix::identity(2);
    let mut full_operator = if target_qubit_index == 0 {
        gate.matrix().clone()
    } else {
        identity.clone()
    };
    for position in 1..number_of_quantum_bits {
        let factor = if position == target_qubit_index {
            gate.matrix()
        } else {
            &identity
        };
        full_operator = full_operator.tensor_product(factor);
    }

    tracing::trace!(
        "expanded {} at qubit {} to a {}x{} operator",
        gate.gate_name(),
        target_qubit_index,
        full_operator.rows(),
        full_operator.columns()
    );
    Ok(full_operator)
}

// =============================================================================
// 2. Single-qubit gate application
// =============================================================================

/// Applies a single-qubit gate at `target_qubit_index`, replacing the state
/// vector with the fully computed result. A one-qubit register skips the
/// embedding and multiplies the gate matrix directly.
pub fn apply_single_qubit_gate(
    state: &mut QuantumStateVector,
    gate: &QuantumGate,
    target_qubit_index: usize,
) -> SimulationResult<()> {
    check_single_qubit_gate(gate)?;
    let number_of_quantum_bits = state.number_of_quantum_bits();
    if target_qubit_index >= number_of_quantum_bits {
        return Err(SimulationError::InvalidQubitIndex {
            index: target_qubit_index,
            total: number_of_quantum_bits,
        });
    }

    let full_operator = if number_of_quantum_bits == 1 {
        gate.matrix().clone()
    } else {
        expand_to_full_operator(gate, number_of_quantum_bits, target_qubit_index)?
    };

    multiply_into_state(state, &full_operator)?;
    tracing::debug!(
        "applied {} to qubit {} of a {}-qubit register",
        gate.gate_name(),
        target_qubit_index,
        number_of_quantum_bits
    );
    Ok(())
}

// =============================================================================
// 3. Full-register gate application
// =============================================================================

/// Applies a gate whose matrix already spans the whole register, e.g. a CNOT
/// on a two-qubit system. No embedding takes place.
pub fn apply_full_register_gate(
    state: &mut QuantumStateVector,
    gate: &QuantumGate,
) -> SimulationResult<()> {
    if gate.matrix().rows() != state.dimension() {
        return Err(SimulationError::Matrix(MatrixError::DimensionMismatch(
            format!(
                "gate {} is {}x{} but the register state vector has dimension {}",
                gate.gate_name(),
                gate.matrix().rows(),
                gate.matrix().columns(),
                state.dimension()
            ),
        )));
    }

    multiply_into_state(state, gate.matrix())?;
    tracing::debug!(
        "applied {} to the full {}-qubit register",
        gate.gate_name(),
        state.number_of_quantum_bits()
    );
    Ok(())
}

fn check_single_qubit_gate(gate: &QuantumGate) -> SimulationResult<()> {
    if gate.number_of_gate_qubits() != 1 {
        return Err(SimulationError::Matrix(MatrixError::DimensionMismatch(
            format!(
                "gate {} is {}x{}, expected a 2x2 single-qubit gate",
                gate.gate_name(),
                gate.matrix().rows(),
                gate.matrix().columns()
            ),
        )));
    }
    Ok(())
}

/// Multiplies `operator` into the state treated as a column vector and adopts
/// the fresh result. The state is untouched until the product is complete.
fn multiply_into_state(
    state: &mut QuantumStateVector,
    operator: &ComplexMatrix,
) -> SimulationResult<()> {
    let column = ComplexMatrix::column_vector(state.amplitudes().to_vec())?;
    let product = operator.multiply(&column)?;
    state.adopt_amplitudes(product.into_data());
    Ok(())
}
