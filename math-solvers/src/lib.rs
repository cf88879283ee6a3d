//! Exact geometric and dense linear solvers for geometry engines
//!
//! This crate provides the two numerical building blocks used by the
//! constraint and geometry code of a rendering engine:
//!
//! - **Line intersection**: exact 2x2 determinant test for two lines or
//!   segments in the plane ([`line_intersection`], [`Segment2D`])
//! - **Dense linear solver**: Crout LU decomposition with implicit scaling and
//!   partial pivoting, followed by forward/backward substitution
//!   ([`solve_in_place`], [`lu_solve`], [`LuDecomposition`])
//! - **Generic scalar types**: Works with f64 and f32
//!
//! The solver targets the small, dense, square systems that arise in
//! geometric constraint solving.
//!
//! # Example
//!
//! ```
//! use math_geom_solvers::{Point2D, line_intersection, lu_solve};
//! use ndarray::array;
//!
//! let hit = line_intersection(
//!     Point2D::new(0.0, 0.0),
//!     Point2D::new(2.0, 2.0),
//!     Point2D::new(0.0, 2.0),
//!     Point2D::new(2.0, 0.0),
//!     true,
//! );
//! assert_eq!(hit, Some(Point2D::new(1.0, 1.0)));
//!
//! let a = array![[4.0, 1.0], [1.0, 3.0]];
//! let b = array![1.0, 2.0];
//! let x = lu_solve(&a, &b)?;
//! assert!((a.dot(&x) - &b).iter().all(|r: &f64| r.abs() < 1e-12));
//! # Ok::<(), math_geom_solvers::SolverError>(())
//! ```

pub mod config;
pub mod direct;
pub mod error;
pub mod geometry;
pub mod parallel;
pub mod traits;

// Re-export main types
pub use config::{LuConfig, PivotPolicy};
pub use error::{Result, SolverError};
pub use geometry::{Point2D, Segment2D, line_intersection};
pub use traits::RealField;

// Re-export direct solvers
pub use direct::{
    LuDecomposition, LuFactors, lu_decompose_in_place, lu_solve, solve_batch, solve_in_place,
    solve_in_place_with_config,
};
