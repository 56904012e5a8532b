//! Particle data: the immutable per-particle draw and the Pod instance
//! struct handed to the renderer.

use bytemuck::{Pod, Zeroable};
use skitter_core::Vec2;

/// One particle of a burst, generated once and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Index within the burst.
    pub id: u32,
    /// Launch angle in radians: an even spread around the circle plus a
    /// small jitter.
    pub angle: f32,
    /// Travel distance from the origin.
    pub distance: f32,
    /// Visual size.
    pub size: f32,
    /// Start delay in milliseconds.
    pub delay_ms: f32,
    /// Animation duration in milliseconds.
    pub duration_ms: f32,
}

impl Particle {
    /// Terminal position: `origin + distance * (cos angle, sin angle)`.
    ///
    /// The host animates from the origin to this point; it is fixed at
    /// creation and never re-randomized.
    #[must_use]
    pub fn end_position(&self, origin: Vec2) -> Vec2 {
        origin.add(Vec2::from_angle(self.angle).scale(self.distance))
    }

    /// Time at which this particle's animation finishes, relative to
    /// burst creation.
    #[inline]
    #[must_use]
    pub fn finish_ms(&self) -> f32 {
        self.delay_ms + self.duration_ms
    }
}

/// Render-facing particle data, laid out for direct vertex-buffer upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Start position (burst origin).
    pub start: [f32; 2],
    /// Terminal position.
    pub end: [f32; 2],
    /// Visual size.
    pub size: f32,
    /// Start delay in milliseconds.
    pub delay_ms: f32,
    /// Animation duration in milliseconds.
    pub duration_ms: f32,
    /// Padding to a 16-byte multiple.
    pub _pad: f32,
}

impl ParticleInstance {
    /// Size of an instance in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Builds an instance from a particle and its burst origin.
    #[must_use]
    pub fn from_particle(particle: &Particle, origin: Vec2) -> Self {
        let end = particle.end_position(origin);
        Self {
            start: [origin.x, origin.y],
            end: [end.x, end.y],
            size: particle.size,
            delay_ms: particle.delay_ms,
            duration_ms: particle.duration_ms,
            _pad: 0.0,
        }
    }
}
