//! 4×4 single precision transformation matrix
//!
//! Row-major storage (`data[row * 4 + col]`) and the column-vector
//! convention: points transform as `M * v`, translations live in the last
//! column. Projection helpers are right-handed and map depth to `[0, 1]`.

use crate::error::{LinalgError, Result, check_index};
use crate::vector3::Vector3f;
use crate::vector4::Vector4f;
use math_geom_solvers::lu_solve;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// Substitute for a zero scale factor, which would make the matrix singular
const MIN_SCALE: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix4 {
    /// Row-major elements
    pub data: [f32; 16],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix4 {
    /// Build from row-major elements
    pub fn from_row_major(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Build from four rows
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let mut data = [0.0; 16];
        for (r, row) in rows.iter().enumerate() {
            data[r * 4..r * 4 + 4].copy_from_slice(row);
        }
        Self { data }
    }

    pub fn identity() -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn zero() -> Self {
        Self { data: [0.0; 16] }
    }

    /// Exact identity test
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Bounds-checked element read
    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        check_index("row", row, 4)?;
        check_index("column", col, 4)?;
        Ok(self.data[row * 4 + col])
    }

    /// Bounds-checked element write
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        check_index("row", row, 4)?;
        check_index("column", col, 4)?;
        self.data[row * 4 + col] = value;
        Ok(())
    }

    /// Bounds-checked read by flat row-major index
    pub fn get_flat(&self, index: usize) -> Result<f32> {
        check_index("index", index, 16)?;
        Ok(self.data[index])
    }

    /// Bounds-checked write by flat row-major index
    pub fn set_flat(&mut self, index: usize, value: f32) -> Result<()> {
        check_index("index", index, 16)?;
        self.data[index] = value;
        Ok(())
    }

    pub fn row(&self, r: usize) -> Result<Vector4f> {
        check_index("row", r, 4)?;
        Ok(Vector4f::new(
            self.data[r * 4],
            self.data[r * 4 + 1],
            self.data[r * 4 + 2],
            self.data[r * 4 + 3],
        ))
    }

    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for r in 0..4 {
            for c in 0..4 {
                out[c * 4 + r] = self.data[r * 4 + c];
            }
        }
        Self { data: out }
    }

    /// 2×2 sub-determinants of the top two and bottom two rows
    fn minors(&self) -> ([f32; 6], [f32; 6]) {
        let m = &self.data;
        let s = [
            m[0] * m[5] - m[4] * m[1],
            m[0] * m[6] - m[4] * m[2],
            m[0] * m[7] - m[4] * m[3],
            m[1] * m[6] - m[5] * m[2],
            m[1] * m[7] - m[5] * m[3],
            m[2] * m[7] - m[6] * m[3],
        ];
        let c = [
            m[8] * m[13] - m[12] * m[9],
            m[8] * m[14] - m[12] * m[10],
            m[8] * m[15] - m[12] * m[11],
            m[9] * m[14] - m[13] * m[10],
            m[9] * m[15] - m[13] * m[11],
            m[10] * m[15] - m[14] * m[11],
        ];
        (s, c)
    }

    pub fn determinant(&self) -> f32 {
        let (s, c) = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Closed-form inverse, or `None` when the determinant is exactly zero
    pub fn try_inverse(&self) -> Option<Self> {
        let (s, c) = self.minors();
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1]
            + s[5] * c[0];
        if det == 0.0 {
            return None;
        }
        let inv_det = 1.0 / det;
        let m = &self.data;

        let out = [
            (m[5] * c[5] - m[6] * c[4] + m[7] * c[3]) * inv_det,
            (-m[1] * c[5] + m[2] * c[4] - m[3] * c[3]) * inv_det,
            (m[13] * s[5] - m[14] * s[4] + m[15] * s[3]) * inv_det,
            (-m[9] * s[5] + m[10] * s[4] - m[11] * s[3]) * inv_det,
            (-m[4] * c[5] + m[6] * c[2] - m[7] * c[1]) * inv_det,
            (m[0] * c[5] - m[2] * c[2] + m[3] * c[1]) * inv_det,
            (-m[12] * s[5] + m[14] * s[2] - m[15] * s[1]) * inv_det,
            (m[8] * s[5] - m[10] * s[2] + m[11] * s[1]) * inv_det,
            (m[4] * c[4] - m[5] * c[2] + m[7] * c[0]) * inv_det,
            (-m[0] * c[4] + m[1] * c[2] - m[3] * c[0]) * inv_det,
            (m[12] * s[4] - m[13] * s[2] + m[15] * s[0]) * inv_det,
            (-m[8] * s[4] + m[9] * s[2] - m[11] * s[0]) * inv_det,
            (-m[4] * c[3] + m[5] * c[1] - m[6] * c[0]) * inv_det,
            (m[0] * c[3] - m[1] * c[1] + m[2] * c[0]) * inv_det,
            (-m[12] * s[3] + m[13] * s[1] - m[14] * s[0]) * inv_det,
            (m[8] * s[3] - m[9] * s[1] + m[10] * s[0]) * inv_det,
        ];
        Some(Self { data: out })
    }

    /// Closed-form inverse
    ///
    /// A singular matrix yields the identity; use [`Matrix4::try_inverse`] to
    /// detect that case.
    pub fn inverse(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        self.try_inverse().unwrap_or_else(|| {
            log::debug!("inverse of singular matrix requested, returning identity");
            Self::identity()
        })
    }

    /// Inverse-transpose of the upper 3×3 block, embedded in an identity
    ///
    /// Used to transform normals. Returns the identity when the block is
    /// singular.
    pub fn normal_matrix(&self) -> Self {
        let m = |r: usize, c: usize| self.data[r * 4 + c];
        let det = m(0, 0) * m(1, 1) * m(2, 2)
            + m(0, 1) * m(1, 2) * m(2, 0)
            + m(0, 2) * m(1, 0) * m(2, 1)
            - m(0, 2) * m(1, 1) * m(2, 0)
            - m(0, 1) * m(1, 0) * m(2, 2)
            - m(0, 0) * m(1, 2) * m(2, 1);

        if det == 0.0 {
            return Self::identity();
        }

        Self::from_rows([
            [
                (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1)) / det,
                (m(1, 2) * m(2, 0) - m(1, 0) * m(2, 2)) / det,
                (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0)) / det,
                0.0,
            ],
            [
                (m(0, 2) * m(2, 1) - m(0, 1) * m(2, 2)) / det,
                (m(0, 0) * m(2, 2) - m(0, 2) * m(2, 0)) / det,
                (m(0, 1) * m(2, 0) - m(0, 0) * m(2, 1)) / det,
                0.0,
            ],
            [
                (m(0, 1) * m(1, 2) - m(0, 2) * m(1, 1)) / det,
                (m(0, 2) * m(1, 0) - m(0, 0) * m(1, 2)) / det,
                (m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0)) / det,
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Solve `M x = b` with the dense LU solver
    pub fn solve(&self, b: Vector4f) -> Result<Vector4f> {
        let a = self.to_ndarray();
        let rhs = Array1::from_vec(b.to_array().to_vec());
        let x = lu_solve(&a, &rhs)?;
        Ok(Vector4f::new(x[0], x[1], x[2], x[3]))
    }

    /// Copy into a 4×4 ndarray
    pub fn to_ndarray(&self) -> Array2<f32> {
        Array2::from_shape_fn((4, 4), |(r, c)| self.data[r * 4 + c])
    }

    /// Copy from a 4×4 ndarray
    pub fn from_ndarray(a: &Array2<f32>) -> Result<Self> {
        let (rows, cols) = a.dim();
        if rows != 4 {
            return Err(LinalgError::IndexOutOfRange {
                name: "row",
                index: rows,
                len: 4,
            });
        }
        if cols != 4 {
            return Err(LinalgError::IndexOutOfRange {
                name: "column",
                index: cols,
                len: 4,
            });
        }
        let mut data = [0.0; 16];
        for ((r, c), v) in a.indexed_iter() {
            data[r * 4 + c] = *v;
        }
        Ok(Self { data })
    }

    pub fn translation(dx: f32, dy: f32, dz: f32) -> Self {
        let mut m = Self::identity();
        m.data[3] = dx;
        m.data[7] = dy;
        m.data[11] = dz;
        m
    }

    pub fn translation_v(v: Vector3f) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    /// Rotation by `angle` radians around `axis` (normalized internally)
    pub fn rotation(axis: Vector3f, angle: f32) -> Self {
        if angle == 0.0 {
            return Self::identity();
        }
        let axis = axis.normalized();
        let (x, y, z) = (axis.x, axis.y, axis.z);
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;

        Self::from_rows([
            [c + x * x * t, x * y * t - z * s, x * z * t + y * s, 0.0],
            [y * x * t + z * s, c + y * y * t, y * z * t - x * s, 0.0],
            [z * x * t - y * s, z * y * t + x * s, c + z * z * t, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rotation_deg(axis: Vector3f, degrees: f32) -> Self {
        Self::rotation(axis, degrees.to_radians())
    }

    pub fn rotation_x(angle: f32) -> Self {
        Self::rotation(Vector3f::new(1.0, 0.0, 0.0), angle)
    }

    pub fn rotation_y(angle: f32) -> Self {
        Self::rotation(Vector3f::new(0.0, 1.0, 0.0), angle)
    }

    pub fn rotation_z(angle: f32) -> Self {
        Self::rotation(Vector3f::new(0.0, 0.0, 1.0), angle)
    }

    pub fn rotation_x_deg(degrees: f32) -> Self {
        Self::rotation_x(degrees.to_radians())
    }

    pub fn rotation_y_deg(degrees: f32) -> Self {
        Self::rotation_y(degrees.to_radians())
    }

    pub fn rotation_z_deg(degrees: f32) -> Self {
        Self::rotation_z(degrees.to_radians())
    }

    /// Uniform scaling
    pub fn scaling(scale: f32) -> Self {
        Self::scaling_xyz(scale, scale, scale)
    }

    /// Per-axis scaling; a zero factor is replaced by 0.001 to keep the
    /// matrix invertible
    pub fn scaling_xyz(sx: f32, sy: f32, sz: f32) -> Self {
        let fix = |s: f32| if s == 0.0 { MIN_SCALE } else { s };
        let mut m = Self::identity();
        m.data[0] = fix(sx);
        m.data[5] = fix(sy);
        m.data[10] = fix(sz);
        m
    }

    /// Right-handed perspective projection from a vertical field of view
    pub fn perspective_fov_rh(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let y_scale = 1.0 / (fov * 0.5).tan();
        let x_scale = y_scale / aspect;
        let q = far / (near - far);

        Self::from_rows([
            [x_scale, 0.0, 0.0, 0.0],
            [0.0, y_scale, 0.0, 0.0],
            [0.0, 0.0, q, q * near],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Right-handed orthographic projection centered on the view axis
    pub fn ortho_rh(width: f32, height: f32, near: f32, far: f32) -> Self {
        let half_w = width * 0.5;
        let half_h = height * 0.5;
        Self::ortho_off_center_rh(-half_w, half_w, -half_h, half_h, near, far)
    }

    /// Right-handed orthographic projection of an arbitrary view box
    pub fn ortho_off_center_rh(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let z_range = 1.0 / (far - near);
        Self::from_rows([
            [2.0 / (right - left), 0.0, 0.0, (left + right) / (left - right)],
            [0.0, 2.0 / (top - bottom), 0.0, (top + bottom) / (bottom - top)],
            [0.0, 0.0, -z_range, -near * z_range],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

impl Index<(usize, usize)> for Matrix4 {
    type Output = f32;

    /// Panics on an out-of-range index; use [`Matrix4::get`] for a checked read.
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        if let Err(e) = check_index("row", row, 4).and(check_index("column", col, 4)) {
            panic!("{e}");
        }
        &self.data[row * 4 + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        if let Err(e) = check_index("row", row, 4).and(check_index("column", col, 4)) {
            panic!("{e}");
        }
        &mut self.data[row * 4 + col]
    }
}

impl Add for Matrix4 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut out = self.data;
        for (o, v) in out.iter_mut().zip(other.data.iter()) {
            *o += v;
        }
        Self { data: out }
    }
}

impl Sub for Matrix4 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        let mut out = self.data;
        for (o, v) in out.iter_mut().zip(other.data.iter()) {
            *o -= v;
        }
        Self { data: out }
    }
}

impl Mul for Matrix4 {
    type Output = Self;
    fn mul(self, right: Self) -> Self {
        let l = &self.data;
        let r = &right.data;
        let mut out = [0.0f32; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = l[row * 4] * r[col]
                    + l[row * 4 + 1] * r[4 + col]
                    + l[row * 4 + 2] * r[8 + col]
                    + l[row * 4 + 3] * r[12 + col];
            }
        }
        Self { data: out }
    }
}

impl Mul<f32> for Matrix4 {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self {
            data: self.data.map(|v| v * s),
        }
    }
}

impl Mul<Vector4f> for Matrix4 {
    type Output = Vector4f;
    fn mul(self, v: Vector4f) -> Vector4f {
        let m = &self.data;
        Vector4f::new(
            m[0] * v.x + m[1] * v.y + m[2] * v.z + m[3] * v.w,
            m[4] * v.x + m[5] * v.y + m[6] * v.z + m[7] * v.w,
            m[8] * v.x + m[9] * v.y + m[10] * v.z + m[11] * v.w,
            m[12] * v.x + m[13] * v.y + m[14] * v.z + m[15] * v.w,
        )
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.data.chunks_exact(4).enumerate() {
            if r > 0 {
                write!(f, " ")?;
            }
            write!(f, "[{} {} {} {}]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}
