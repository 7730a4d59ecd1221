//! Rectangle value type.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its side lengths.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The rectangle's area, `width * height`.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
