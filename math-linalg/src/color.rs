//! RGBA color with floating point channels

use crate::error::{LinalgError, Result, check_index};
use crate::vector4::Vector4f;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Color with channels nominally in `[0, 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color4 {
    pub const BLACK: Color4 = Color4::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color4 = Color4::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color4 = Color4::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to 8-bit channels `[r, g, b, a]`
    ///
    /// Each channel is scaled by 255 and truncated toward zero. Values
    /// outside `[0, 1]` saturate at 0 and 255.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let to_byte = |c: f32| (c * 255.0) as u8;
        [to_byte(self.r), to_byte(self.g), to_byte(self.b), to_byte(self.a)]
    }

    /// Build from 8-bit channels `[r, g, b, a]`
    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        let to_unit = |c: u8| f32::from(c) / 255.0;
        Self::new(to_unit(r), to_unit(g), to_unit(b), to_unit(a))
    }

    /// Pack as `0xAARRGGBB`
    pub fn to_argb(&self) -> u32 {
        let [r, g, b, a] = self.to_rgba8();
        u32::from_be_bytes([a, r, g, b])
    }

    /// Unpack from `0xAARRGGBB`
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_rgba8([r, g, b, a])
    }

    /// Bounds-checked channel read (r, g, b, a)
    pub fn get(&self, index: usize) -> Result<f32> {
        check_index("index", index, 4)?;
        Ok(self[index])
    }

    /// Bounds-checked channel write
    pub fn set(&mut self, index: usize, value: f32) -> Result<()> {
        check_index("index", index, 4)?;
        self[index] = value;
        Ok(())
    }
}

impl Index<usize> for Color4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("{}", LinalgError::index(index, 4)),
        }
    }
}

impl IndexMut<usize> for Color4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("{}", LinalgError::index(index, 4)),
        }
    }
}

impl From<Vector4f> for Color4 {
    fn from(v: Vector4f) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Color4> for Vector4f {
    fn from(c: Color4) -> Self {
        Vector4f::new(c.r, c.g, c.b, c.a)
    }
}

impl fmt::Display for Color4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.r, self.g, self.b, self.a)
    }
}
