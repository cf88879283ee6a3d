//! Error types for the value types.

use math_geom_solvers::SolverError;
use thiserror::Error;

/// Errors that can occur when working with vectors and matrices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinalgError {
    /// A component was addressed with an invalid index.
    ///
    /// This signals a programming error; indices are never clamped.
    #[error("{name} {index} out of range (0..{len})")]
    IndexOutOfRange {
        /// Which index was wrong ("index", "row" or "column")
        name: &'static str,
        /// The invalid index
        index: usize,
        /// Number of valid positions
        len: usize,
    },

    /// The dense solver rejected the system.
    #[error("solver error: {0}")]
    Solver(#[from] SolverError),
}

/// A specialized `Result` type for value type operations.
pub type Result<T> = std::result::Result<T, LinalgError>;

impl LinalgError {
    pub(crate) fn index(index: usize, len: usize) -> Self {
        LinalgError::IndexOutOfRange {
            name: "index",
            index,
            len,
        }
    }

    /// Returns `true` if this is an indexing error.
    pub fn is_index_error(&self) -> bool {
        matches!(self, LinalgError::IndexOutOfRange { .. })
    }
}

/// Check `index < len`, for accessors returning `Result`
#[inline]
pub(crate) fn check_index(name: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(LinalgError::IndexOutOfRange { name, index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_message() {
        let err = LinalgError::index(3, 2);
        assert_eq!(err.to_string(), "index 3 out of range (0..2)");
        assert!(err.is_index_error());
    }

    #[test]
    fn test_solver_error_converts() {
        let err: LinalgError = SolverError::SingularMatrix { row: 0 }.into();
        assert!(!err.is_index_error());
        assert!(err.to_string().starts_with("solver error"));
    }

    #[test]
    fn test_check_index() {
        assert!(check_index("row", 3, 4).is_ok());
        assert_eq!(
            check_index("row", 4, 4),
            Err(LinalgError::IndexOutOfRange {
                name: "row",
                index: 4,
                len: 4
            })
        );
    }
}
