//! Line and segment intersection
//!
//! The intersection point is solved with Cramer's rule on the 2x2 system
//! describing both lines. The parallel test is an exact comparison against
//! zero: nearly parallel lines still report a point, which may be far away
//! and numerically unstable.

use super::point::Point2D;
use serde::{Deserialize, Serialize};

#[inline]
fn det2(x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
    x1 * y2 - y1 * x2
}

#[inline]
fn within(value: f64, a: f64, b: f64) -> bool {
    value >= a.min(b) && value <= a.max(b)
}

/// Intersect the line through `p0`/`p1` with the line through `q0`/`q1`
///
/// Returns `None` when the lines are parallel or coincident (the two cases
/// are not distinguished). With `clamp_to_segments` the point must also lie
/// within both segments' bounding boxes, which for a point already on both
/// lines means it lies on both segments.
pub fn line_intersection(
    p0: Point2D,
    p1: Point2D,
    q0: Point2D,
    q1: Point2D,
    clamp_to_segments: bool,
) -> Option<Point2D> {
    let dp = p0 - p1;
    let dq = q0 - q1;

    let a = det2(dp.x, dp.y, dq.x, dq.y);
    if a == 0.0 {
        return None;
    }

    let d1 = det2(p0.x, p0.y, p1.x, p1.y);
    let d2 = det2(q0.x, q0.y, q1.x, q1.y);
    let x = det2(d1, dp.x, d2, dq.x) / a;
    let y = det2(d1, dp.y, d2, dq.y) / a;

    if clamp_to_segments
        && !(within(x, p0.x, p1.x)
            && within(y, p0.y, p1.y)
            && within(x, q0.x, q1.x)
            && within(y, q0.y, q1.y))
    {
        return None;
    }

    Some(Point2D::new(x, y))
}

/// Ordered pair of points
///
/// Whether it acts as a bounded segment or an infinite line is chosen per
/// call, not stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment2D {
    pub start: Point2D,
    pub end: Point2D,
}

impl Segment2D {
    /// Create a new segment
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Vector from `start` to `end`
    pub fn direction(&self) -> Point2D {
        self.end - self.start
    }

    /// Segment length
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Whether `point` lies inside the segment's axis-aligned bounding box
    pub fn bounds_contain(&self, point: &Point2D) -> bool {
        within(point.x, self.start.x, self.end.x) && within(point.y, self.start.y, self.end.y)
    }

    /// Intersect with another segment, or with both lines extended when
    /// `clamp_to_segments` is false
    pub fn intersect(&self, other: &Segment2D, clamp_to_segments: bool) -> Option<Point2D> {
        line_intersection(
            self.start,
            self.end,
            other.start,
            other.end,
            clamp_to_segments,
        )
    }
}
