// =============================================================================
// DenseQ Reference Simulator - Bell State Demo
// =============================================================================
// Table of Contents:
//   1. Register construction and gate application
//   2. State rendering
//   3. Deterministic sampling and statistics
// =============================================================================
// Purpose: Demonstrates the complete workflow: build a Bell state through
//          the dense application engine, render the amplitude vector, and
//          aggregate sampled measurement outcomes.
// =============================================================================

use anyhow::Result;
use quantum_simulator::gate_library::{CNOT_GATE, HADAMARD_GATE};
use quantum_simulator::measurement::MeasurementStatistics;
use quantum_simulator::state_vector::QuantumStateVector;
use state_display::{render_amplitude_table, render_matrix, render_probability_histogram};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // =========================================================================
    // 1. Register construction and gate application
    // =========================================================================
    println!("Step 1: Bell state |00⟩ -> (|00⟩ + |11⟩)/√2");
    println!("  - hadamard_gate on qubit 0");
    println!("  - controlled_not_gate over the full register (control = qubit 0)");
    println!();

    let mut state = QuantumStateVector::zero_state(2)?;
    HADAMARD_GATE.apply(&mut state, 0)?;
    CNOT_GATE.apply(&mut state, 0)?;

    // =========================================================================
    // 2. State rendering
    // =========================================================================
    println!("Hadamard matrix:");
    println!("{}", render_matrix(HADAMARD_GATE.matrix()));
    println!("Amplitude vector:");
    println!("{}", render_amplitude_table(&state));
    println!("Probability histogram:");
    println!("{}", render_probability_histogram(&state, 50));

    // =========================================================================
    // 3. Deterministic sampling and statistics
    // =========================================================================
    // The core takes randomness from the caller; a plain linear congruential
    // generator is plenty for a demo.
    let mut seed: u64 = 0x5deece66d;
    let mut next_random = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 11) as f64 / (1u64 << 53) as f64
    };

    let outcomes: Vec<Vec<u8>> = (0..1000)
        .map(|_| state.measure_all_deterministic(next_random()))
        .collect();
    let statistics = MeasurementStatistics::from_bitstrings(&outcomes);

    println!("Sampled {} shots:", statistics.total_shots);
    let mut bitstrings: Vec<_> = statistics.probabilities.iter().collect();
    bitstrings.sort_by(|a, b| a.0.cmp(b.0));
    for (bitstring, probability) in bitstrings {
        println!("  |{}⟩: {:.1}%", bitstring, probability * 100.0);
    }
    println!("Entropy: {:.4} bits", statistics.entropy);

    Ok(())
}
