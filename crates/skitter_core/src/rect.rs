//! Screen-space rectangles and the gap-aware overlap predicate.

use serde::{Deserialize, Serialize};

use crate::vec2::Vec2;

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle centered on a point.
    #[must_use]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x * 0.5,
            center.y - size.y * 0.5,
            size.x,
            size.y,
        )
    }

    /// Returns the right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns true if another rectangle comes within `gap` units of this one.
    ///
    /// Two rectangles "overlap" for placement purposes unless one of the
    /// four separating conditions holds with the gap applied. Symmetric:
    /// `a.overlaps_with_gap(b, g) == b.overlaps_with_gap(a, g)`.
    #[must_use]
    pub fn overlaps_with_gap(&self, other: &Self, gap: f32) -> bool {
        !(self.right() + gap < other.x
            || self.x - gap > other.right()
            || self.bottom() + gap < other.y
            || self.y - gap > other.bottom())
    }

    /// Returns true if this rectangle lies fully inside `outer`, with
    /// `tolerance` units of slack for float rounding.
    #[must_use]
    pub fn contained_in(&self, outer: &Self, tolerance: f32) -> bool {
        self.x >= outer.x - tolerance
            && self.y >= outer.y - tolerance
            && self.right() <= outer.right() + tolerance
            && self.bottom() <= outer.bottom() + tolerance
    }

    /// Shrinks the rectangle by the given amount on all sides.
    #[must_use]
    pub fn shrink(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - amount * 2.0,
            self.height - amount * 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_touching_within_gap() {
        let a = Rect::new(0.0, 0.0, 100.0, 50.0);
        let b = Rect::new(110.0, 0.0, 100.0, 50.0);

        // 10 units apart: clear at gap 5, too close at gap 20
        assert!(!a.overlaps_with_gap(&b, 5.0));
        assert!(a.overlaps_with_gap(&b, 20.0));
    }

    #[test]
    fn test_overlap_symmetry() {
        let a = Rect::new(10.0, 20.0, 100.0, 50.0);
        let b = Rect::new(90.0, 40.0, 80.0, 30.0);

        for gap in [0.0, 5.0, 20.0, 100.0] {
            assert_eq!(
                a.overlaps_with_gap(&b, gap),
                b.overlaps_with_gap(&a, gap),
                "predicate must be symmetric at gap {gap}"
            );
        }
    }

    #[test]
    fn test_from_center_size() {
        let r = Rect::from_center_size(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(r, Rect::new(40.0, 45.0, 20.0, 10.0));
    }

    #[test]
    fn test_contained_in() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(Rect::new(10.0, 10.0, 50.0, 50.0).contained_in(&outer, 0.0));
        assert!(!Rect::new(60.0, 10.0, 50.0, 50.0).contained_in(&outer, 0.0));
    }
}
