//! Core traits for the dense solvers
//!
//! This module defines the scalar abstraction used throughout the solver library:
//! - [`RealField`]: Trait for the floating-point types the LU solver operates on

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types that can be used by the dense solvers.
///
/// This trait abstracts over single and double precision, so the same
/// decomposition code serves `f32` engine buffers and `f64` constraint
/// systems.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for geometric constraint solving)
/// - `f32` (for buffers coming straight from the renderer)
pub trait RealField:
    Float
    + NumAssign
    + FromPrimitive
    + ToPrimitive
    + Copy
    + Send
    + Sync
    + Debug
    + Display
    + Default
    + 'static
{
    /// Value written over an exact-zero pivot in compatibility mode
    #[inline]
    fn pivot_substitute() -> Self {
        Self::epsilon()
    }

    /// Convert a tolerance expressed in `f64` into this type
    #[inline]
    fn from_tolerance(tol: f64) -> Self {
        Self::from_f64(tol).unwrap_or_else(Self::epsilon)
    }

    /// Lossy conversion used for logging
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl RealField for f64 {}

impl RealField for f32 {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pivot_substitute_is_machine_epsilon() {
        assert_eq!(<f64 as RealField>::pivot_substitute(), f64::EPSILON);
        assert_eq!(<f32 as RealField>::pivot_substitute(), f32::EPSILON);
    }

    #[test]
    fn test_from_tolerance() {
        assert_relative_eq!(f64::from_tolerance(1e-9), 1e-9);
        assert_relative_eq!(f32::from_tolerance(1e-3), 1e-3_f32);
    }

    #[test]
    fn test_to_f64_lossy() {
        assert_relative_eq!(0.5_f32.to_f64_lossy(), 0.5);
    }
}
