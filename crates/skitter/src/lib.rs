//! # SKITTER
//!
//! An evasive two-button prompt: the accept control is static, the
//! decline control dodges the pointer inside its container without ever
//! crowding the accept control, and accepting fires a radial particle
//! burst from the pointer before the confirmation transition.
//!
//! The heavy lifting lives in the member crates; this facade wires them
//! into a [`PromptController`] the host drives with input events and a
//! frame tick:
//!
//! ```rust,ignore
//! use skitter::{PromptController, SkitterConfig};
//!
//! let mut prompt = PromptController::new(provider, SkitterConfig::default(), seed);
//!
//! // per frame:
//! for event in prompt.on_frame(dt_ms) {
//!     match event {
//!         PromptEvent::BurstFinished => { /* unmount the burst layer */ }
//!         PromptEvent::Accepted => { /* show the confirmation view */ }
//!     }
//! }
//! let translation = prompt.offset(); // apply to the decline control
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod prompt;

pub use config::{AcceptConfig, SkitterConfig, SkitterConfigError};
pub use prompt::{PromptController, PromptEvent};

pub use skitter_burst::{Burst, BurstAnimator, BurstConfig, Particle, ParticleInstance};
pub use skitter_core::{Rect, Vec2};
pub use skitter_engine::{Geometry, GeometryProvider, PlacementConfig, PlacementEngine, StaticGeometry};
