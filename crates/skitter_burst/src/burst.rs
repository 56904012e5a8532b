//! Burst creation and lifecycle.
//!
//! The animator owns the tuning and the RNG; each spawn produces an
//! independent [`Burst`] that the host animates and ticks until it
//! reports completion.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use skitter_core::Vec2;

use crate::config::BurstConfig;
use crate::particle::{Particle, ParticleInstance};
use crate::timer::CompletionTimer;

/// Factory for bursts.
#[derive(Debug, Clone)]
pub struct BurstAnimator {
    /// Generation tuning.
    config: BurstConfig,
    /// Deterministic draw source, shared across spawns.
    rng: ChaCha8Rng,
}

impl BurstAnimator {
    /// Creates an animator with the given tuning and seed.
    #[must_use]
    pub fn new(config: BurstConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Spawns a burst at `origin`.
    ///
    /// Draws a particle count in the configured range, spreads the launch
    /// angles evenly around the circle with a small jitter, and draws the
    /// remaining parameters uniformly. The burst's completion timer is
    /// armed at the slowest particle's finish time.
    pub fn spawn(&mut self, origin: Vec2) -> Burst {
        let count = self.rng.gen_range(self.config.count_min..=self.config.count_max);

        #[allow(clippy::cast_precision_loss)]
        let count_f = count as f32;

        let particles = (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let spread = std::f32::consts::TAU * i as f32 / count_f;
                let jitter = (self.rng.gen::<f32>() - 0.5) * self.config.angle_jitter;

                Particle {
                    id: i,
                    angle: spread + jitter,
                    distance: self
                        .rng
                        .gen_range(self.config.distance_min..=self.config.distance_max),
                    size: self.rng.gen_range(self.config.size_min..=self.config.size_max),
                    delay_ms: self.rng.gen_range(0.0..=self.config.delay_max_ms),
                    duration_ms: self
                        .rng
                        .gen_range(self.config.duration_min_ms..=self.config.duration_max_ms),
                }
            })
            .collect();

        tracing::trace!(count, x = origin.x, y = origin.y, "burst spawned");
        Burst::from_particles(origin, particles)
    }
}

/// One complete burst: an origin, an immutable particle set, and the
/// coalesced completion timer.
#[derive(Debug, Clone)]
pub struct Burst {
    /// Spawn point of every particle.
    origin: Vec2,
    /// The particle set, immutable after creation.
    particles: Vec<Particle>,
    /// Fires when the slowest particle finishes.
    timer: CompletionTimer,
}

impl Burst {
    /// Builds a burst from pre-drawn particles.
    ///
    /// The completion deadline is `max(delay + duration)` across the set;
    /// an empty set completes on the first tick.
    #[must_use]
    pub fn from_particles(origin: Vec2, particles: Vec<Particle>) -> Self {
        let deadline_ms = particles
            .iter()
            .map(Particle::finish_ms)
            .fold(0.0_f32, f32::max);

        Self {
            origin,
            particles,
            timer: CompletionTimer::new(deadline_ms),
        }
    }

    /// The burst origin.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// The particle set.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Milliseconds from creation until the burst completes.
    #[must_use]
    pub fn completion_deadline_ms(&self) -> f32 {
        self.timer.deadline_ms()
    }

    /// Advances the burst by `dt_ms` milliseconds.
    ///
    /// Returns true exactly once, when the slowest particle's animation
    /// completes. The particle set never changes; only the timer does.
    pub fn update(&mut self, dt_ms: f32) -> bool {
        self.timer.update(dt_ms)
    }

    /// Cancels the completion signal, e.g. when the hosting view is torn
    /// down before the burst finishes.
    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    /// Returns true once the burst has reported completion.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.has_fired()
    }

    /// Fills `out` with render-ready instances, one per particle.
    ///
    /// The output is cleared first; `bytemuck::cast_slice` turns the
    /// result into bytes for vertex-buffer upload.
    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.extend(
            self.particles
                .iter()
                .map(|p| ParticleInstance::from_particle(p, self.origin)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_is_slowest_particle() {
        let particles = vec![
            Particle {
                id: 0,
                angle: 0.0,
                distance: 60.0,
                size: 16.0,
                delay_ms: 100.0,
                duration_ms: 800.0,
            },
            Particle {
                id: 1,
                angle: 1.0,
                distance: 80.0,
                size: 20.0,
                delay_ms: 0.0,
                duration_ms: 700.0,
            },
        ];
        let burst = Burst::from_particles(Vec2::ZERO, particles);
        assert!((burst.completion_deadline_ms() - 900.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let mut a = BurstAnimator::new(BurstConfig::default(), 5);
        let mut b = BurstAnimator::new(BurstConfig::default(), 5);

        let burst_a = a.spawn(Vec2::new(10.0, 20.0));
        let burst_b = b.spawn(Vec2::new(10.0, 20.0));
        assert_eq!(burst_a.particles(), burst_b.particles());
    }

    #[test]
    fn test_write_instances_matches_particles() {
        let mut animator = BurstAnimator::new(BurstConfig::default(), 9);
        let burst = animator.spawn(Vec2::new(50.0, 50.0));

        let mut instances = Vec::new();
        burst.write_instances(&mut instances);
        assert_eq!(instances.len(), burst.particles().len());

        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), instances.len() * ParticleInstance::SIZE);
    }
}
