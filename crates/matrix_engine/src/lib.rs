// =============================================================================
// DenseQ Reference Simulator - Matrix Engine
// =============================================================================
// Table of Contents:
//   1. Module Declarations
//   2. Re-exports
//   3. Prelude Module
// =============================================================================
// Purpose: Dense complex matrix engine backing the quantum simulator. Owns
//          matrix storage, multiplication, identity construction, and the
//          Kronecker (tensor) product used to embed local gate operators
//          into the full register space.
// =============================================================================

pub mod error;
pub mod matrix;

pub use error::{MatrixError, MatrixResult};
pub use matrix::ComplexMatrix;

pub mod prelude {
    pub use crate::error::{MatrixError, MatrixResult};
    pub use crate::matrix::ComplexMatrix;
}
