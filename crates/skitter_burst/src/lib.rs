//! # SKITTER Burst
//!
//! **Self-Expiring Radial Particle Bursts**
//!
//! A burst is one complete set of 8-12 particles spawned from a single
//! origin event. Every particle carries its own trajectory, size, delay,
//! and duration, drawn once at creation and never re-randomized. The
//! burst reports completion exactly once, when the slowest-finishing
//! particle's animation ends, through a single coalesced timer that the
//! host advances each frame.
//!
//! ## Lifecycle
//!
//! ```text
//! spawn(origin) ──► host animates instances ──► update(dt) fires once
//!                                         └──► cancel() / drop: never fires
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod burst;
pub mod config;
pub mod error;
pub mod particle;
pub mod timer;

pub use burst::{Burst, BurstAnimator};
pub use config::BurstConfig;
pub use error::{BurstConfigError, BurstConfigResult};
pub use particle::{Particle, ParticleInstance};
pub use timer::CompletionTimer;
