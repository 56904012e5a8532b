//! Live geometry snapshots and the provider seam.
//!
//! The engine never touches a real view tree. The host implements
//! [`GeometryProvider`] against whatever surface it renders to, and the
//! engine consumes plain [`Geometry`] snapshots. Tests supply synthetic
//! rectangles through [`StaticGeometry`].

use skitter_core::{Rect, Vec2};

/// One snapshot of the live layout, queried fresh on every operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// The bounding container the decline control must stay inside.
    pub container: Rect,
    /// The static accept control's rectangle.
    pub accept: Rect,
    /// Natural (untransformed) size of the decline control.
    pub decline_size: Vec2,
}

/// Source of live layout snapshots.
///
/// Returning `None` means the host has not completed a layout pass yet;
/// callers skip the operation entirely rather than acting on stale or
/// missing rectangles.
pub trait GeometryProvider {
    /// Produces the current layout, or `None` if not yet measurable.
    fn geometry(&self) -> Option<Geometry>;
}

/// A provider that always reports the same snapshot.
///
/// Intended for tests and fixed-size hosts.
#[derive(Debug, Clone, Copy)]
pub struct StaticGeometry(pub Geometry);

impl GeometryProvider for StaticGeometry {
    fn geometry(&self) -> Option<Geometry> {
        Some(self.0)
    }
}
