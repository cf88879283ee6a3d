//! Planar geometry used by the intersector
//!
//! - [`Point2D`]: double precision point in the plane
//! - [`Segment2D`] and [`line_intersection`]: exact 2x2 determinant test for
//!   the intersection of two lines or segments

mod intersect;
mod point;

pub use intersect::{Segment2D, line_intersection};
pub use point::Point2D;
