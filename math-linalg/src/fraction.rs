//! Numerator/denominator pair

use crate::error::{LinalgError, Result, check_index};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A ratio kept as its two parts, e.g. an aspect ratio
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: f32,
    pub denominator: f32,
}

impl Fraction {
    pub fn new(numerator: f32, denominator: f32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// `numerator / denominator`, with IEEE semantics for a zero denominator
    pub fn value(&self) -> f32 {
        self.numerator / self.denominator
    }

    /// Bounds-checked read: 0 is the numerator, 1 the denominator
    pub fn get(&self, index: usize) -> Result<f32> {
        check_index("index", index, 2)?;
        Ok(self[index])
    }

    pub fn set(&mut self, index: usize, value: f32) -> Result<()> {
        check_index("index", index, 2)?;
        self[index] = value;
        Ok(())
    }
}

impl Index<usize> for Fraction {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.numerator,
            1 => &self.denominator,
            _ => panic!("{}", LinalgError::index(index, 2)),
        }
    }
}

impl IndexMut<usize> for Fraction {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.numerator,
            1 => &mut self.denominator,
            _ => panic!("{}", LinalgError::index(index, 2)),
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}/{} = {}]",
            self.numerator,
            self.denominator,
            self.value()
        )
    }
}
