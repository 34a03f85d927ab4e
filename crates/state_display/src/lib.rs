// =============================================================================
// DenseQ Reference Simulator - State Display Layer
// =============================================================================
// Table of Contents:
//   1. StateRenderPacket - Serializable rendering data
//   2. Amplitude table rendering
//   3. Probability histogram rendering
//   4. Matrix rendering
// =============================================================================
// Purpose: Caller-facing diagnostics over the read-only amplitude vector.
//          Everything here renders to owned strings; nothing mutates or
//          retains the state it is handed.
// =============================================================================

use matrix_engine::ComplexMatrix;
use num_complex::Complex64;
use quantum_simulator::state_vector::QuantumStateVector;
use serde::{Deserialize, Serialize};

// =============================================================================
// 1. StateRenderPacket - Serializable rendering data
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateRenderPacket {
    pub number_of_quantum_bits: usize,
    pub rows: Vec<AmplitudeTableRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmplitudeTableRow {
    pub basis_label: String,
    pub real_part: f64,
    pub imaginary_part: f64,
    pub probability: f64,
}

impl StateRenderPacket {
    pub fn from_state(state: &QuantumStateVector) -> Self {
        let number_of_quantum_bits = state.number_of_quantum_bits();
        let rows = state
            .amplitudes()
            .iter()
            .enumerate()
            .map(|(basis_index, amplitude)| AmplitudeTableRow {
                basis_label: basis_label(basis_index, number_of_quantum_bits),
                real_part: amplitude.re,
                imaginary_part: amplitude.im,
                probability: amplitude.norm_sqr(),
            })
            .collect();
        Self {
            number_of_quantum_bits,
            rows,
        }
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Qubit 0 is the most significant bit, so it prints leftmost.
fn basis_label(basis_index: usize, number_of_quantum_bits: usize) -> String {
    format!("{basis_index:0width$b}", width = number_of_quantum_bits)
}

fn format_complex(value: Complex64) -> String {
    format!("{:+.4}{:+.4}i", value.re, value.im)
}

// =============================================================================
// 2. Amplitude table rendering
// =============================================================================

pub fn render_amplitude_table(state: &QuantumStateVector) -> String {
    let packet = StateRenderPacket::from_state(state);
    let mut output = String::new();
    for row in &packet.rows {
        output.push_str(&format!(
            "|{}⟩  {}  p={:.4}\n",
            row.basis_label,
            format_complex(Complex64::new(row.real_part, row.imaginary_part)),
            row.probability
        ));
    }
    output
}

// =============================================================================
// 3. Probability histogram rendering
// =============================================================================

pub fn render_probability_histogram(state: &QuantumStateVector, bar_width: usize) -> String {
    let packet = StateRenderPacket::from_state(state);
    let mut output = String::new();
    for row in &packet.rows {
        let bar_length = (row.probability * bar_width as f64).round() as usize;
        output.push_str(&format!(
            "|{}⟩ {:6.2}% {}\n",
            row.basis_label,
            row.probability * 100.0,
            "█".repeat(bar_length)
        ));
    }
    output
}

// =============================================================================
// 4. Matrix rendering
// =============================================================================

pub fn render_matrix(matrix: &ComplexMatrix) -> String {
    let mut output = String::new();
    for row in 0..matrix.rows() {
        let entries: Vec<String> = (0..matrix.columns())
            .map(|column| format_complex(matrix.data()[row * matrix.columns() + column]))
            .collect();
        output.push_str(&entries.join("  "));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantum_simulator::gate_library::{CNOT_GATE, HADAMARD_GATE};

    fn bell_state() -> QuantumStateVector {
        let mut state = QuantumStateVector::zero_state(2).unwrap();
        HADAMARD_GATE.apply(&mut state, 0).unwrap();
        CNOT_GATE.apply(&mut state, 0).unwrap();
        state
    }

    #[test]
    fn test_amplitude_table_labels() {
        let table = render_amplitude_table(&bell_state());
        assert!(table.contains("|00⟩"));
        assert!(table.contains("|11⟩"));
        assert!(table.contains("p=0.5000"));
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn test_histogram_bar_lengths() {
        let histogram = render_probability_histogram(&bell_state(), 10);
        let bars: Vec<usize> = histogram
            .lines()
            .map(|line| line.matches('█').count())
            .collect();
        assert_eq!(bars, vec![5, 0, 0, 5]);
    }

    #[test]
    fn test_matrix_rendering() {
        let rendered = render_matrix(&ComplexMatrix::identity(2));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("+1.0000+0.0000i"));
        assert!(lines[1].ends_with("+1.0000+0.0000i"));
    }

    #[test]
    fn test_render_packet_serialization() {
        let packet = StateRenderPacket::from_state(&bell_state());
        let json = packet.to_json_string().unwrap();
        assert!(json.contains("\"basis_label\": \"11\""));

        let decoded: StateRenderPacket = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.number_of_quantum_bits, 2);
        assert_eq!(decoded.rows.len(), 4);
    }
}
