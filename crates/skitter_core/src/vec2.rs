//! 2D vector used for points, sizes, offsets, and directions.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A 2D vector in screen units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[repr(C)]
pub struct Vec2 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new vector.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise addition.
    #[inline]
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise subtraction.
    #[inline]
    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Scales both components.
    #[inline]
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Distance to another point.
    #[inline]
    #[must_use]
    pub fn distance_to(self, other: Self) -> f32 {
        other.sub(self).length()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    ///
    /// The degenerate case matters: the placement fallback direction is
    /// undefined when the accept control sits exactly on the container
    /// center, and callers must skip the push rather than divide by zero.
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let magnitude = self.length();
        if magnitude > 0.0 {
            Some(self.scale(1.0 / magnitude))
        } else {
            None
        }
    }

    /// Unit vector for an angle in radians.
    #[inline]
    #[must_use]
    pub fn from_angle(radians: f32) -> Self {
        Self::new(radians.cos(), radians.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_unit_length() {
        let v = Vec2::new(3.0, 4.0).normalized().unwrap();
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalized_zero_is_none() {
        assert!(Vec2::ZERO.normalized().is_none());
    }

    #[test]
    fn test_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-6);
    }
}
