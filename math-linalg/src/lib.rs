//! Value types for rendering and geometry code
//!
//! Small `Copy` structs with plain arithmetic:
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] in single (`f`) and double (`d`)
//!   precision
//! - [`Matrix4`]: row-major 4×4 transform with projection helpers and a
//!   dense solve backed by `math-geom-solvers`
//! - [`Color4`] and [`Fraction`]
//!
//! Checked accessors return [`LinalgError`]; the `Index` operators panic on
//! an out-of-range index.
//!
//! ```
//! use math_geom_linalg::{Matrix4, Vector3f, Vector4f};
//!
//! let m = Matrix4::translation(1.0, 2.0, 3.0) * Matrix4::scaling(2.0);
//! let p = m * Vector4f::from_xyz(Vector3f::new(1.0, 1.0, 1.0), 1.0);
//! assert_eq!(p.xyz(), Vector3f::new(3.0, 4.0, 5.0));
//! assert_eq!(m.inverse() * p, Vector4f::new(1.0, 1.0, 1.0, 1.0));
//! ```

mod color;
mod error;
mod fraction;
mod matrix4;
mod vector2;
mod vector3;
mod vector4;

pub use color::Color4;
pub use error::{LinalgError, Result};
pub use fraction::Fraction;
pub use matrix4::Matrix4;
pub use vector2::{Vector2, Vector2d, Vector2f};
pub use vector3::{Vector3, Vector3d, Vector3f};
pub use vector4::{Vector4, Vector4d, Vector4f};

/// `scalar * vector` for the concrete float types
macro_rules! impl_scalar_lhs_mul {
    ($($vec:ident),*) => {
        $(
            impl std::ops::Mul<$vec<f32>> for f32 {
                type Output = $vec<f32>;
                fn mul(self, v: $vec<f32>) -> $vec<f32> {
                    v * self
                }
            }

            impl std::ops::Mul<$vec<f64>> for f64 {
                type Output = $vec<f64>;
                fn mul(self, v: $vec<f64>) -> $vec<f64> {
                    v * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(Vector2, Vector3, Vector4);

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
