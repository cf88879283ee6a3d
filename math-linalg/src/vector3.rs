//! 3D vector type

use crate::error::{LinalgError, Result, check_index};
use crate::vector2::Vector2;
use num_traits::{Float, NumCast};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

/// 3D vector, generic over the component precision
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
}

/// Single precision 3D vector
pub type Vector3f = Vector3<f32>;
/// Double precision 3D vector
pub type Vector3d = Vector3<f64>;

impl<T: Float> Vector3<T> {
    /// Create a new vector
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// The zero vector
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Extend a 2D vector with a z component
    pub fn from_xy(xy: Vector2<T>, z: T) -> Self {
        Self::new(xy.x, xy.y, z)
    }

    /// Build from the first three entries of a slice
    pub fn from_slice(xyz: &[T]) -> Result<Self> {
        match xyz {
            [x, y, z, ..] => Ok(Self::new(*x, *y, *z)),
            _ => Err(LinalgError::index(xyz.len(), 3)),
        }
    }

    /// The x and y components
    pub fn xy(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Components as an array
    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Bounds-checked component read
    pub fn get(&self, index: usize) -> Result<T> {
        check_index("index", index, 3)?;
        Ok(self[index])
    }

    /// Bounds-checked component write
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index("index", index, 3)?;
        self[index] = value;
        Ok(())
    }

    pub fn length_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
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
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Angle to another vector in radians, in `[0, PI]`
    ///
    /// The cosine is clamped to `[-1, 1]` so rounding never produces NaN for
    /// (anti)parallel vectors. Zero-length input yields NaN.
    pub fn angle(&self, other: &Self) -> T {
        let cos = self.dot(other) / (self.length() * other.length());
        cos.min(T::one()).max(-T::one()).acos()
    }

    /// Angle between the lines spanned by both vectors, in `[0, PI/2]`
    pub fn small_angle(&self, other: &Self) -> T {
        let angle = self.angle(other);
        let pi = <T as NumCast>::from(std::f64::consts::PI).unwrap_or_else(T::zero);
        angle.min(pi - angle)
    }

    /// Convert to another precision
    pub fn cast<U: Float>(&self) -> Option<Vector3<U>> {
        Some(Vector3::new(
            <U as NumCast>::from(self.x)?,
            <U as NumCast>::from(self.y)?,
            <U as NumCast>::from(self.z)?,
        ))
    }
}

impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    /// Panics on an out-of-range index; use [`Vector3::get`] for a checked read.
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{}", LinalgError::index(index, 3)),
        }
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("{}", LinalgError::index(index, 3)),
        }
    }
}

impl<T: Float> Add for Vector3<T> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Float> Sub for Vector3<T> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Float> Mul<T> for Vector3<T> {
    type Output = Self;
    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl<T: Float> Div<T> for Vector3<T> {
    type Output = Self;
    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl<T: Float> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.x, self.y, self.z)
    }
}
