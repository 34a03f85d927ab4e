// =============================================================================
// DenseQ Reference Simulator - Simulation Property Tests
// =============================================================================
// Table of Contents:
//   1. Gate sequence generators
//   2. Normalization invariant properties
//   3. End-to-end sampling workflow
// =============================================================================
// Purpose: Property-based coverage for the invariant that unitary gate
//          sequences preserve normalization, plus an end-to-end workflow
//          from state construction to measurement statistics.
// =============================================================================

use proptest::prelude::*;
use quantum_simulator::prelude::*;

// =============================================================================
// 1. Gate sequence generators
// =============================================================================

fn single_qubit_gate(choice: usize) -> &'static QuantumGate {
    match choice % 5 {
        0 => &IDENTITY_GATE,
        1 => &PAULI_X_GATE,
        2 => &PAULI_Y_GATE,
        3 => &PAULI_Z_GATE,
        _ => &HADAMARD_GATE,
    }
}

// =============================================================================
// 2. Normalization invariant properties
// =============================================================================

proptest! {
    #[test]
    fn normalization_survives_single_qubit_gate_sequences(
        sequence in prop::collection::vec((0usize..5, 0usize..3), 0..24),
    ) {
        let mut state = QuantumStateVector::zero_state(3).unwrap();
        for (choice, target_qubit_index) in sequence {
            apply_single_qubit_gate(&mut state, single_qubit_gate(choice), target_qubit_index)
                .unwrap();
        }
        prop_assert!((state.norm_squared() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn normalization_survives_cnot_interleaving(
        sequence in prop::collection::vec(0usize..6, 0..16),
    ) {
        let mut state = QuantumStateVector::zero_state(2).unwrap();
        for step in sequence {
            if step < 5 {
                apply_single_qubit_gate(&mut state, single_qubit_gate(step), step % 2).unwrap();
            } else {
                apply_full_register_gate(&mut state, &CNOT_GATE).unwrap();
            }
        }
        prop_assert!((state.norm_squared() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn probability_distribution_always_sums_to_one(
        sequence in prop::collection::vec((0usize..5, 0usize..2), 0..12),
    ) {
        let mut state = QuantumStateVector::zero_state(2).unwrap();
        for (choice, target_qubit_index) in sequence {
            apply_single_qubit_gate(&mut state, single_qubit_gate(choice), target_qubit_index)
                .unwrap();
        }
        let total: f64 = state.probability_distribution().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }
}

// =============================================================================
// 3. End-to-end sampling workflow
// =============================================================================

#[test]
fn bell_state_sampling_statistics() {
    let mut state = QuantumStateVector::zero_state(2).unwrap();
    HADAMARD_GATE.apply(&mut state, 0).unwrap();
    CNOT_GATE.apply(&mut state, 0).unwrap();

    // Sweep the unit interval as the external randomness source; half the
    // samples must land on each Bell branch.
    let outcomes: Vec<Vec<u8>> = (0..1000)
        .map(|i| state.measure_all_deterministic((i as f64 + 0.5) / 1000.0))
        .collect();
    let statistics = MeasurementStatistics::from_bitstrings(&outcomes);

    assert_eq!(statistics.total_shots, 1000);
    assert!((statistics.probability_of("00") - 0.5).abs() < 1e-2);
    assert!((statistics.probability_of("11") - 0.5).abs() < 1e-2);
    assert_eq!(statistics.count_of("01"), 0);
    assert_eq!(statistics.count_of("10"), 0);
    assert!((statistics.entropy - 1.0).abs() < 1e-2);
}

#[test]
fn hadamard_then_hadamard_returns_to_zero_state() {
    let mut state = QuantumStateVector::zero_state(3).unwrap();
    for target_qubit_index in 0..3 {
        HADAMARD_GATE.apply(&mut state, target_qubit_index).unwrap();
    }
    for target_qubit_index in 0..3 {
        HADAMARD_GATE.apply(&mut state, target_qubit_index).unwrap();
    }
    assert!((state.probability_of_basis_index(0).unwrap() - 1.0).abs() < 1e-9);
}
