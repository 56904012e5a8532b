//! The valid offset span inside the padded container.
//!
//! Bounds are expressed in the decline control's local offset space: an
//! offset `(x, y)` is valid when the control, centered on its base anchor
//! plus that offset, stays fully inside the container shrunk by the
//! configured padding.

use rand::Rng;
use skitter_core::{Rect, Vec2};

/// The inclusive range of valid offsets.
///
/// The span may be inverted (`min > max` on an axis) when the container is
/// smaller than the control plus padding. Clamping an inverted span
/// resolves to `min`, and sampling treats the span width as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetBounds {
    /// Minimum valid offset per axis.
    pub min: Vec2,
    /// Maximum valid offset per axis.
    pub max: Vec2,
}

impl OffsetBounds {
    /// Computes bounds for a control of `size` anchored at `base` inside
    /// `container`, keeping `padding` units clear of every edge.
    #[must_use]
    pub fn compute(container: &Rect, base: Vec2, size: Vec2, padding: f32) -> Self {
        let half = size.scale(0.5);
        Self {
            min: Vec2::new(
                container.x + padding - base.x + half.x,
                container.y + padding - base.y + half.y,
            ),
            max: Vec2::new(
                container.right() - padding - base.x - half.x,
                container.bottom() - padding - base.y - half.y,
            ),
        }
    }

    /// Clamps an offset into the span.
    ///
    /// `f32::clamp` panics on inverted ranges, and inverted spans are a
    /// legal state here, so each axis resolves as `max(min, min(max, v))`.
    #[must_use]
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            offset.x.min(self.max.x).max(self.min.x),
            offset.y.min(self.max.y).max(self.min.y),
        )
    }

    /// Draws a uniform random offset within the span.
    #[must_use]
    pub fn sample(&self, rng: &mut impl Rng) -> Vec2 {
        let range_x = (self.max.x - self.min.x).max(0.0);
        let range_y = (self.max.y - self.min.y).max(0.0);
        Vec2::new(
            self.min.x + rng.gen::<f32>() * range_x,
            self.min.y + rng.gen::<f32>() * range_y,
        )
    }

    /// Returns true if the offset is inside the span (inverted spans
    /// contain only `min`).
    #[must_use]
    pub fn contains(&self, offset: Vec2) -> bool {
        self.clamp(offset) == offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bounds() -> OffsetBounds {
        OffsetBounds {
            min: Vec2::new(-100.0, -50.0),
            max: Vec2::new(200.0, 150.0),
        }
    }

    #[test]
    fn test_clamp_inside_is_identity() {
        let b = bounds();
        let p = Vec2::new(10.0, 20.0);
        assert_eq!(b.clamp(p), p);
    }

    #[test]
    fn test_clamp_outside() {
        let b = bounds();
        assert_eq!(b.clamp(Vec2::new(500.0, -500.0)), Vec2::new(200.0, -50.0));
    }

    #[test]
    fn test_inverted_span_resolves_to_min() {
        let b = OffsetBounds {
            min: Vec2::new(50.0, 50.0),
            max: Vec2::new(-50.0, -50.0),
        };
        assert_eq!(b.clamp(Vec2::new(0.0, 0.0)), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_sample_stays_inside() {
        let b = bounds();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(b.contains(b.sample(&mut rng)));
        }
    }

    #[test]
    fn test_compute_matches_padded_container() {
        let container = Rect::new(0.0, 0.0, 400.0, 400.0);
        let base = Vec2::new(320.0, 172.0);
        let size = Vec2::new(150.0, 60.0);
        let b = OffsetBounds::compute(&container, base, size, 20.0);

        // Control at min offset touches the padded top-left corner.
        let at_min = Rect::from_center_size(base.add(b.min), size);
        assert!((at_min.x - 20.0).abs() < 1e-4);
        assert!((at_min.y - 20.0).abs() < 1e-4);

        // Control at max offset touches the padded bottom-right corner.
        let at_max = Rect::from_center_size(base.add(b.max), size);
        assert!((at_max.right() - 380.0).abs() < 1e-4);
        assert!((at_max.bottom() - 380.0).abs() < 1e-4);
    }
}
