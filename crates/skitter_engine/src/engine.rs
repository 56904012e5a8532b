//! # The Placement Engine
//!
//! **Bounded Random Search with a Deterministic Terminal Case**
//!
//! All three operations commit an offset inside the current
//! [`OffsetBounds`] and terminate in bounded time:
//!
//! 1. `relocate` usually succeeds in 1-2 draws; after 30 failed attempts
//!    the deterministic fallback commits without further overlap checks
//! 2. `reconcile` is a single clamp-then-push pass so resize storms stay
//!    cheap
//! 3. `place_initial` sweeps four ordered candidates and commits a
//!    best-effort terminal offset if all of them fail

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use skitter_core::{Rect, Vec2};

use crate::bounds::OffsetBounds;
use crate::config::PlacementConfig;
use crate::geometry::Geometry;

/// The evasive target placement engine.
///
/// Owns the decline control's current offset and the seeded RNG driving
/// the random search. Single writer: only engine operations mutate the
/// offset, and each runs to completion before yielding.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    /// Current displacement from the resting anchor.
    offset: Vec2,
    /// Gates resize reconciliation until first placement completes.
    initialized: bool,
    /// Tuning constants.
    config: PlacementConfig,
    /// Deterministic draw source.
    rng: ChaCha8Rng,
}

impl PlacementEngine {
    /// Creates an engine at the resting offset.
    #[must_use]
    pub fn new(config: PlacementConfig, seed: u64) -> Self {
        Self {
            offset: Vec2::ZERO,
            initialized: false,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the currently committed offset.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns true once initial placement has run.
    #[inline]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the tuning in effect.
    #[must_use]
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Resting anchor of the decline control: container center plus the
    /// configured base offset.
    #[must_use]
    pub fn base_anchor(&self, geometry: &Geometry) -> Vec2 {
        geometry.container.center().add(self.config.base_offset)
    }

    /// Effective rectangle of the decline control at a hypothetical offset.
    #[must_use]
    pub fn decline_rect_at(&self, geometry: &Geometry, offset: Vec2) -> Rect {
        Rect::from_center_size(self.base_anchor(geometry).add(offset), geometry.decline_size)
    }

    /// Effective rectangle at the currently committed offset.
    #[must_use]
    pub fn decline_rect(&self, geometry: &Geometry) -> Rect {
        self.decline_rect_at(geometry, self.offset)
    }

    /// The valid offset span for the current geometry.
    #[must_use]
    pub fn bounds(&self, geometry: &Geometry) -> OffsetBounds {
        OffsetBounds::compute(
            &geometry.container,
            self.base_anchor(geometry),
            geometry.decline_size,
            self.config.padding,
        )
    }

    /// Moves the decline control away from an approaching pointer.
    ///
    /// Draws up to `max_attempts` uniform candidates inside the bounds.
    /// Draws closer than `min_travel` to the current offset are replaced
    /// by a step from the current offset along a random direction, so the
    /// control visibly travels. The first candidate clearing the accept
    /// rectangle by the gap margin wins; if every attempt fails, the
    /// deterministic fallback commits and the search ends.
    pub fn relocate(&mut self, geometry: &Geometry) {
        let bounds = self.bounds(geometry);

        for attempt in 0..self.config.max_attempts {
            let mut candidate = bounds.sample(&mut self.rng);

            if candidate.distance_to(self.offset) < self.config.min_travel {
                let angle = self.rng.gen::<f32>() * std::f32::consts::TAU;
                let magnitude =
                    self.config.min_travel + self.rng.gen::<f32>() * self.config.travel_spread;
                candidate =
                    bounds.clamp(self.offset.add(Vec2::from_angle(angle).scale(magnitude)));
            }

            let rect = self.decline_rect_at(geometry, candidate);
            if !rect.overlaps_with_gap(&geometry.accept, self.config.gap) {
                tracing::trace!(attempt, x = candidate.x, y = candidate.y, "relocated");
                self.offset = candidate;
                return;
            }
        }

        tracing::debug!(
            attempts = self.config.max_attempts,
            "search exhausted, committing deterministic fallback"
        );
        self.offset = self.fallback_offset(geometry, &bounds);
    }

    /// Re-fits the committed offset after a container resize.
    ///
    /// Clamps into the new bounds, and if the clamped rectangle still
    /// overlaps the accept control, pushes once along the separation
    /// direction and re-clamps. Best-effort by design: resize events are
    /// frequent and must stay cheap, so there is no retry loop.
    pub fn reconcile(&mut self, geometry: &Geometry) {
        if !self.initialized {
            return;
        }

        let bounds = self.bounds(geometry);
        let mut clamped = bounds.clamp(self.offset);

        let rect = self.decline_rect_at(geometry, clamped);
        if rect.overlaps_with_gap(&geometry.accept, self.config.gap) {
            if let Some(direction) = rect.center().sub(geometry.accept.center()).normalized() {
                let pushed = self
                    .offset
                    .add(direction.scale(self.config.fallback_distance));
                clamped = bounds.clamp(pushed);
                tracing::trace!(x = clamped.x, y = clamped.y, "pushed clear after resize");
            }
        }

        self.offset = clamped;
    }

    /// Places the control safely after the host's first layout pass.
    ///
    /// Runs once. If the resting offset overlaps the accept rectangle,
    /// tries right, left, below, above in order, committing the first
    /// clamped candidate that clears it. If all four fail, the clamped
    /// right-hand candidate commits anyway; the contract promises
    /// non-overlap with high probability, not certainty, under degenerate
    /// geometry. Marks the engine initialized regardless of outcome.
    pub fn place_initial(&mut self, geometry: &Geometry) {
        if self.initialized {
            return;
        }

        let bounds = self.bounds(geometry);
        let resting = self.decline_rect_at(geometry, Vec2::ZERO);

        if resting.overlaps_with_gap(&geometry.accept, self.config.gap) {
            let candidates = [
                Vec2::new(self.config.initial_reach_x, 0.0),
                Vec2::new(-self.config.initial_reach_x, 0.0),
                Vec2::new(0.0, self.config.initial_reach_y),
                Vec2::new(0.0, -self.config.initial_reach_y),
            ];

            let mut committed = false;
            for candidate in candidates {
                let clamped = bounds.clamp(candidate);
                let rect = self.decline_rect_at(geometry, clamped);
                if !rect.overlaps_with_gap(&geometry.accept, self.config.gap) {
                    tracing::trace!(x = clamped.x, y = clamped.y, "initial placement");
                    self.offset = clamped;
                    committed = true;
                    break;
                }
            }

            if !committed {
                // Terminal commit, possibly still overlapping.
                let fallback = bounds.clamp(Vec2::new(self.config.initial_reach_x, 0.0));
                tracing::debug!(
                    x = fallback.x,
                    y = fallback.y,
                    "no clear initial candidate, committing best effort"
                );
                self.offset = fallback;
            }
        }

        self.initialized = true;
    }

    /// Deterministic relocation fallback: the unit vector from the accept
    /// center toward the container center, scaled to `fallback_distance`
    /// and clamped. When the two centers coincide the direction is
    /// undefined and the current offset is clamped instead.
    fn fallback_offset(&self, geometry: &Geometry, bounds: &OffsetBounds) -> Vec2 {
        let separation = geometry
            .container
            .center()
            .sub(geometry.accept.center());

        match separation.normalized() {
            Some(direction) => bounds.clamp(direction.scale(self.config.fallback_distance)),
            None => bounds.clamp(self.offset),
        }
    }
}
