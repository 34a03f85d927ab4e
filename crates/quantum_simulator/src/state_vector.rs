// =============================================================================
// DenseQ Reference Simulator - Quantum State Vector
// =============================================================================
// Table of Contents:
//   1. QuantumStateVector - Dense n-qubit register state
//   2. Construction - zero state, caller-supplied amplitudes
//   3. Queries - amplitudes, probabilities, inner product
//   4. Mutation - normalization, reset, vector adoption
//   5. Deterministic measurement sampling
// =============================================================================
// Purpose: Owns the 2^n complex amplitudes describing an n-qubit register.
//          Qubit 0 is the MOST significant bit of the basis index (leftmost
//          tensor factor), matching the gate application engine's embedding
//          order. Only the application engine replaces the vector, and only
//          with a fully computed replacement.
// =============================================================================

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{SimulationError, SimulationResult};

/// Tolerance for the `Σ|amplitude|² == 1` check. Exact floating-point
/// equality would spuriously reject valid states.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

// =============================================================================
// 1. QuantumStateVector - Dense n-qubit register state
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumStateVector {
    amplitudes: Vec<Complex64>,
    number_of_quantum_bits: usize,
}

// =============================================================================
// 2. Construction
// =============================================================================

impl QuantumStateVector {
    /// The `|0...0>` basis state on `number_of_quantum_bits` qubits.
    pub fn zero_state(number_of_quantum_bits: usize) -> SimulationResult<Self> {
        if number_of_quantum_bits == 0 || number_of_quantum_bits >= usize::BITS as usize {
            return Err(SimulationError::InvalidQubitCount(number_of_quantum_bits));
        }
        let dimension = 1usize << number_of_quantum_bits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            number_of_quantum_bits,
        })
    }

    /// Builds a register from caller-supplied amplitudes. The length must be
    /// a power of two of at least 2, and the vector must already be
    /// normalized within `NORMALIZATION_TOLERANCE`.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> SimulationResult<Self> {
        let length = amplitudes.len();
        if length < 2 || !length.is_power_of_two() {
            return Err(SimulationError::InvalidStateVector { length });
        }

        let norm_squared: f64 = amplitudes.iter().map(|a| a.norm_sqr()).sum();
        if (norm_squared - 1.0).abs() >= NORMALIZATION_TOLERANCE {
            return Err(SimulationError::UnnormalizedState {
                norm_squared,
                tolerance: NORMALIZATION_TOLERANCE,
            });
        }

        Ok(Self {
            amplitudes,
            number_of_quantum_bits: length.trailing_zeros() as usize,
        })
    }
}

// =============================================================================
// 3. Queries
// =============================================================================

impl QuantumStateVector {
    pub fn number_of_quantum_bits(&self) -> usize {
        self.number_of_quantum_bits
    }

    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Read-only view of the full amplitude vector.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub fn amplitude(&self, basis_index: usize) -> SimulationResult<Complex64> {
        self.check_basis_index(basis_index)?;
        Ok(self.amplitudes[basis_index])
    }

    pub fn probability_of_basis_index(&self, basis_index: usize) -> SimulationResult<f64> {
        self.check_basis_index(basis_index)?;
        Ok(self.amplitudes[basis_index].norm_sqr())
    }

    pub fn probability_distribution(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    pub fn norm_squared(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    pub fn inner_product(&self, other: &Self) -> SimulationResult<Complex64> {
        if self.dimension() != other.dimension() {
            return Err(SimulationError::Matrix(
                matrix_engine::MatrixError::DimensionMismatch(format!(
                    "inner product between state vectors of dimension {} and {}",
                    self.dimension(),
                    other.dimension()
                )),
            ));
        }
        Ok(self
            .amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| a.conj() * b)
            .sum())
    }

    fn check_basis_index(&self, basis_index: usize) -> SimulationResult<()> {
        if basis_index >= self.amplitudes.len() {
            return Err(SimulationError::IndexOutOfRange {
                index: basis_index,
                dimension: self.amplitudes.len(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// 4. Mutation
// =============================================================================

impl QuantumStateVector {
    /// Rescales the vector to unit norm. Intended for callers that want to
    /// wash out floating-point drift after long gate sequences.
    pub fn normalize(&mut self) {
        let norm = self.norm_squared().sqrt();
        if norm > 1e-15 {
            for amplitude in &mut self.amplitudes {
                *amplitude /= norm;
            }
        }
    }

    pub fn reset_to_zero_state(&mut self) {
        for amplitude in &mut self.amplitudes {
            *amplitude = Complex64::new(0.0, 0.0);
        }
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Wholesale vector replacement, reserved for the gate application
    /// engine. The replacement is always fully computed before adoption.
    pub(crate) fn adopt_amplitudes(&mut self, amplitudes: Vec<Complex64>) {
        debug_assert_eq!(amplitudes.len(), self.amplitudes.len());
        self.amplitudes = amplitudes;
    }
}

// =============================================================================
// 5. Deterministic measurement sampling
// =============================================================================

impl QuantumStateVector {
    /// Samples a full-register measurement outcome from the probability
    /// distribution, driven by a caller-supplied random value in `[0, 1)`.
    /// Random-number generation itself lives outside the core.
    pub fn measure_all_deterministic(&self, random_value: f64) -> Vec<u8> {
        let mut cumulative = 0.0;
        for (basis_index, amplitude) in self.amplitudes.iter().enumerate() {
            cumulative += amplitude.norm_sqr();
            if random_value < cumulative {
                return self.index_to_bitstring(basis_index);
            }
        }
        self.index_to_bitstring(self.dimension() - 1)
    }

    /// Qubit 0 first (most significant bit of the basis index).
    fn index_to_bitstring(&self, basis_index: usize) -> Vec<u8> {
        (0..self.number_of_quantum_bits)
            .rev()
            .map(|bit| ((basis_index >> bit) & 1) as u8)
            .collect()
    }
}
