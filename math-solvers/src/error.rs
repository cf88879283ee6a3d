//! Error types for the dense linear solver.
//!
//! Geometric "no intersection" outcomes are not errors and never appear
//! here; they are reported as `None` by the intersector.

use thiserror::Error;

/// Errors that can occur while decomposing or solving a dense system.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// A row of the coefficient matrix has no nonzero entry.
    #[error("matrix is singular: row {row} has no nonzero entry")]
    SingularMatrix {
        /// Index of the all-zero row
        row: usize,
    },

    /// A pivot fell below the strict-mode tolerance.
    #[error("pivot in column {column} is too small: |{value:e}| <= tolerance")]
    ZeroPivot {
        /// Column being eliminated
        column: usize,
        /// Pivot value after row exchange
        value: f64,
    },

    /// The coefficient matrix is not square.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The coefficient matrix has no rows.
    #[error("matrix is empty")]
    EmptyMatrix,

    /// A vector or factor does not match the system dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// System dimension
        expected: usize,
        /// Length that was supplied
        got: usize,
    },

    /// A permutation record points outside the matrix.
    #[error("invalid permutation entry {index} for dimension {len}")]
    InvalidPermutation {
        /// Offending pivot row
        index: usize,
        /// System dimension
        len: usize,
    },
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    /// Returns `true` if the matrix was rejected as singular.
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            SolverError::SingularMatrix { .. } | SolverError::ZeroPivot { .. }
        )
    }

    /// Returns `true` for computational faults (bad shapes, corrupt factors)
    /// rather than properties of the system itself.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            SolverError::NotSquare { .. }
                | SolverError::EmptyMatrix
                | SolverError::DimensionMismatch { .. }
                | SolverError::InvalidPermutation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(SolverError::SingularMatrix { row: 2 }.is_singular());
        assert!(
            SolverError::ZeroPivot {
                column: 0,
                value: 0.0
            }
            .is_singular()
        );
        assert!(!SolverError::EmptyMatrix.is_singular());

        assert!(SolverError::NotSquare { rows: 2, cols: 3 }.is_failure());
        assert!(
            SolverError::DimensionMismatch {
                expected: 3,
                got: 4
            }
            .is_failure()
        );
        assert!(!SolverError::SingularMatrix { row: 0 }.is_failure());
    }

    #[test]
    fn test_display() {
        let err = SolverError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(err.to_string(), "matrix is not square: 2x3");

        let err = SolverError::SingularMatrix { row: 1 };
        assert_eq!(
            err.to_string(),
            "matrix is singular: row 1 has no nonzero entry"
        );
    }
}
