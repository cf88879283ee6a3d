//! 4D (homogeneous) vector type

use crate::error::{LinalgError, Result, check_index};
use crate::vector2::Vector2;
use crate::vector3::Vector3;
use num_traits::{Float, NumCast};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

/// 4D vector, generic over the component precision
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// Single precision 4D vector
pub type Vector4f = Vector4<f32>;
/// Double precision 4D vector
pub type Vector4d = Vector4<f64>;

impl<T: Float> Vector4<T> {
    /// Create a new vector
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// The zero vector
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Extend a 3D vector with a w component
    pub fn from_xyz(xyz: Vector3<T>, w: T) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }

    /// Build from the first four entries of a slice
    pub fn from_slice(xyzw: &[T]) -> Result<Self> {
        match xyzw {
            [x, y, z, w, ..] => Ok(Self::new(*x, *y, *z, *w)),
            _ => Err(LinalgError::index(xyzw.len(), 4)),
        }
    }

    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn set_xyz(&mut self, v: Vector3<T>) {
        self.x = v.x;
        self.y = v.y;
        self.z = v.z;
    }

    pub fn xy(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    pub fn set_xy(&mut self, v: Vector2<T>) {
        self.x = v.x;
        self.y = v.y;
    }

    pub fn zw(&self) -> Vector2<T> {
        Vector2::new(self.z, self.w)
    }

    pub fn set_zw(&mut self, v: Vector2<T>) {
        self.z = v.x;
        self.w = v.y;
    }

    /// Components as an array
    pub fn to_array(&self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Bounds-checked component read
    pub fn get(&self, index: usize) -> Result<T> {
        check_index("index", index, 4)?;
        Ok(self[index])
    }

    /// Bounds-checked component write
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index("index", index, 4)?;
        self[index] = value;
        Ok(())
    }

    pub fn length_squared(&self) -> T {
        self.dot(self)
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
        *self / len
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Perspective divide: `(x/w, y/w, z/w, 1)`, or unchanged when `w == 0`
    pub fn div_w(&self) -> Self {
        if self.w == T::zero() {
            return *self;
        }
        Self::new(self.x / self.w, self.y / self.w, self.z / self.w, T::one())
    }

    /// Convert to another precision
    pub fn cast<U: Float>(&self) -> Option<Vector4<U>> {
        Some(Vector4::new(
            <U as NumCast>::from(self.x)?,
            <U as NumCast>::from(self.y)?,
            <U as NumCast>::from(self.z)?,
            <U as NumCast>::from(self.w)?,
        ))
    }
}

impl<T> Index<usize> for Vector4<T> {
    type Output = T;

    /// Panics on an out-of-range index; use [`Vector4::get`] for a checked read.
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("{}", LinalgError::index(index, 4)),
        }
    }
}

impl<T> IndexMut<usize> for Vector4<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("{}", LinalgError::index(index, 4)),
        }
    }
}

impl<T: Float> Add for Vector4<T> {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self::new(self.x + o.x, self.y + o.y, self.z + o.z, self.w + o.w)
    }
}

impl<T: Float> Sub for Vector4<T> {
    type Output = Self;
    fn sub(self, o: Self) -> Self {
        Self::new(self.x - o.x, self.y - o.y, self.z - o.z, self.w - o.w)
    }
}

impl<T: Float> Mul<T> for Vector4<T> {
    type Output = Self;
    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl<T: Float> Div<T> for Vector4<T> {
    type Output = Self;
    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s, self.w / s)
    }
}

impl<T: Float> From<[T; 4]> for Vector4<T> {
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T: fmt::Display> fmt::Display for Vector4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {} {}]", self.x, self.y, self.z, self.w)
    }
}
