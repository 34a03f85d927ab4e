// =============================================================================
// DenseQ Reference Simulator - Complex Matrix
// =============================================================================
// Table of Contents:
//   1. ComplexMatrix - Dense row-major complex matrix
//   2. Construction - new, zeros, identity
//   3. Element access - at, set, raw data views
//   4. Linear algebra - multiply, tensor_product, conjugate_transpose
//   5. Predicates - is_square, is_approximately_unitary
// =============================================================================
// Purpose: Dense complex-valued matrix storage and the arithmetic the gate
//          application engine is built on. Shapes are fixed at construction;
//          every operation that produces a matrix allocates a fresh buffer
//          and leaves its operands untouched.
// =============================================================================

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, MatrixResult};

// =============================================================================
// 1. ComplexMatrix - Dense row-major complex matrix
// =============================================================================

/// Invariant: `data.len() == rows * columns` at all times. Element values may
/// change through `set`, the shape never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexMatrix {
    rows: usize,
    columns: usize,
    data: Vec<Complex64>,
}

// =============================================================================
// 2. Construction
// =============================================================================

impl ComplexMatrix {
    pub fn new(rows: usize, columns: usize, data: Vec<Complex64>) -> MatrixResult<Self> {
        if rows == 0 || columns == 0 {
            return Err(MatrixError::DimensionMismatch(format!(
                "matrix shape {rows}x{columns} must have at least one row and one column"
            )));
        }
        if data.len() != rows * columns {
            return Err(MatrixError::DimensionMismatch(format!(
                "data length {} does not match {rows}x{columns} shape ({} entries required)",
                data.len(),
                rows * columns
            )));
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// All-zero matrix. `rows` and `columns` must be at least 1.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            data: vec![Complex64::new(0.0, 0.0); rows * columns],
        }
    }

    /// Identity matrix of the given size. `size` must be at least 1.
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::zeros(size, size);
        for i in 0..size {
            matrix.data[i * size + i] = Complex64::new(1.0, 0.0);
        }
        matrix
    }

    /// Column vector backed by the given amplitudes. Fails only for an empty
    /// input.
    pub fn column_vector(data: Vec<Complex64>) -> MatrixResult<Self> {
        let rows = data.len();
        Self::new(rows, 1, data)
    }
}

// =============================================================================
// 3. Element access
// =============================================================================

impl ComplexMatrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn at(&self, row: usize, column: usize) -> MatrixResult<Complex64> {
        self.check_bounds(row, column)?;
        Ok(self.data[row * self.columns + column])
    }

    pub fn set(&mut self, row: usize, column: usize, value: Complex64) -> MatrixResult<()> {
        self.check_bounds(row, column)?;
        self.data[row * self.columns + column] = value;
        Ok(())
    }

    pub fn data(&self) -> &[Complex64] {
        &self.data
    }

    pub fn into_data(self) -> Vec<Complex64> {
        self.data
    }

    fn check_bounds(&self, row: usize, column: usize) -> MatrixResult<()> {
        if row >= self.rows || column >= self.columns {
            return Err(MatrixError::IndexOutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}

// =============================================================================
// 4. Linear algebra
// =============================================================================

impl ComplexMatrix {
    /// Standard matrix product. Requires `self.columns == other.rows` and
    /// returns a fresh `self.rows x other.columns` matrix.
    pub fn multiply(&self, other: &ComplexMatrix) -> MatrixResult<ComplexMatrix> {
        if self.columns != other.rows {
            return Err(MatrixError::DimensionMismatch(format!(
                "cannot multiply a {}x{} matrix by a {}x{} matrix",
                self.rows, self.columns, other.rows, other.columns
            )));
        }

        let mut data = vec![Complex64::new(0.0, 0.0); self.rows * other.columns];
        for i in 0..self.rows {
            for j in 0..other.columns {
                let mut sum = Complex64::new(0.0, 0.0);
                for k in 0..self.columns {
                    sum += self.data[i * self.columns + k] * other.data[k * other.columns + j];
                }
                data[i * other.columns + j] = sum;
            }
        }

        Ok(ComplexMatrix {
            rows: self.rows,
            columns: other.columns,
            data,
        })
    }

    /// Kronecker product `self (x) other`. The left operand indexes the coarse
    /// blocks, so operand order follows the qubit ordering of the caller.
    pub fn tensor_product(&self, other: &ComplexMatrix) -> ComplexMatrix {
        let result_rows = self.rows * other.rows;
        let result_columns = self.columns * other.columns;
        let mut data = vec![Complex64::new(0.0, 0.0); result_rows * result_columns];

        for i in 0..self.rows {
            for j in 0..self.columns {
                let left_entry = self.data[i * self.columns + j];
                for k in 0..other.rows {
                    for l in 0..other.columns {
                        let row = i * other.rows + k;
                        let column = j * other.columns + l;
                        data[row * result_columns + column] =
                            left_entry * other.data[k * other.columns + l];
                    }
                }
            }
        }

        ComplexMatrix {
            rows: result_rows,
            columns: result_columns,
            data,
        }
    }

    pub fn conjugate_transpose(&self) -> ComplexMatrix {
        let mut data = vec![Complex64::new(0.0, 0.0); self.rows * self.columns];
        for i in 0..self.rows {
            for j in 0..self.columns {
                data[j * self.rows + i] = self.data[i * self.columns + j].conj();
            }
        }
        ComplexMatrix {
            rows: self.columns,
            columns: self.rows,
            data,
        }
    }
}

// =============================================================================
// 5. Predicates
// =============================================================================

impl ComplexMatrix {
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Checks `M† M ≈ I` entrywise within `tolerance`. Diagnostic only: the
    /// gate application path does not enforce unitarity.
    pub fn is_approximately_unitary(&self, tolerance: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        let product = match self.conjugate_transpose().multiply(self) {
            Ok(product) => product,
            Err(_) => return false,
        };
        let identity = ComplexMatrix::identity(self.rows);
        product
            .data
            .iter()
            .zip(identity.data.iter())
            .all(|(entry, expected)| (entry - expected).norm() < tolerance)
    }
}
