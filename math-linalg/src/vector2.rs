//! 2D vector type

use crate::error::{LinalgError, Result, check_index};
use math_geom_solvers::Point2D;
use num_traits::{Float, NumCast};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

/// 2D vector, generic over the component precision
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
}

/// Single precision 2D vector
pub type Vector2f = Vector2<f32>;
/// Double precision 2D vector
pub type Vector2d = Vector2<f64>;

impl<T: Float> Vector2<T> {
    /// Create a new vector
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The zero vector
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Build from the first two entries of a slice
    pub fn from_slice(xy: &[T]) -> Result<Self> {
        match xy {
            [x, y, ..] => Ok(Self::new(*x, *y)),
            _ => Err(LinalgError::index(xy.len(), 2)),
        }
    }

    /// Components as an array
    pub fn to_array(&self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Bounds-checked component read
    pub fn get(&self, index: usize) -> Result<T> {
        check_index("index", index, 2)?;
        Ok(self[index])
    }

    /// Bounds-checked component write
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index("index", index, 2)?;
        self[index] = value;
        Ok(())
    }

    pub fn length_squared(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction; the zero vector stays zero
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == T::zero() {
            return Self::zero();
        }
        Self::new(self.x / len, self.y / len)
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Convert to another precision
    pub fn cast<U: Float>(&self) -> Option<Vector2<U>> {
        Some(Vector2::new(
            <U as NumCast>::from(self.x)?,
            <U as NumCast>::from(self.y)?,
        ))
    }
}

impl<T> Index<usize> for Vector2<T> {
    type Output = T;

    /// Panics on an out-of-range index; use [`Vector2::get`] for a checked read.
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("{}", LinalgError::index(index, 2)),
        }
    }
}

impl<T> IndexMut<usize> for Vector2<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("{}", LinalgError::index(index, 2)),
        }
    }
}

impl<T: Float> Add for Vector2<T> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Float> Sub for Vector2<T> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Float> Mul<T> for Vector2<T> {
    type Output = Self;
    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl<T: Float> Div<T> for Vector2<T> {
    type Output = Self;
    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s)
    }
}

impl<T: Float> From<[T; 2]> for Vector2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2D> for Vector2d {
    fn from(p: Point2D) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2d> for Point2D {
    fn from(v: Vector2d) -> Self {
        Point2D::new(v.x, v.y)
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.x, self.y)
    }
}
