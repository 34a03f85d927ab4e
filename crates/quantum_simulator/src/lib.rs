// =============================================================================
// DenseQ Reference Simulator - Quantum Simulator
// =============================================================================
// Table of Contents:
//   1. Module Declarations
//   2. Prelude Module
// =============================================================================
// Purpose: Dense n-qubit state-vector simulator. Owns the register state,
//          the standard gate library, and the gate application engine that
//          embeds local operators into the full Hilbert space via Kronecker
//          products. Single-threaded, synchronous, CPU-only linear algebra;
//          intended for small, pedagogical-scale registers.
// =============================================================================

pub mod error;
pub mod gate_application;
pub mod gate_library;
pub mod measurement;
pub mod state_vector;

pub use error::{SimulationError, SimulationResult};
pub use gate_library::QuantumGate;
pub use state_vector::QuantumStateVector;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::gate_application::*;
    pub use crate::gate_library::*;
    pub use crate::measurement::*;
    pub use crate::state_vector::*;
}
