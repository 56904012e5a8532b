//! # SKITTER Placement Engine
//!
//! **Collision-Aware Evasive Repositioning**
//!
//! The engine owns one piece of state: the decline control's offset from
//! its resting anchor. Every operation reads live geometry supplied by the
//! host, commits an offset inside the padded container, and terminates in
//! bounded time:
//!
//! - [`PlacementEngine::relocate`] - up to 30 random draws, then a
//!   deterministic center-seeking fallback
//! - [`PlacementEngine::reconcile`] - single-pass clamp-then-push on resize
//! - [`PlacementEngine::place_initial`] - ordered candidate sweep after the
//!   first layout pass
//!
//! ## Rules
//!
//! 1. **No unbounded loops** - the attempt cap and fallback guarantee
//!    termination under any geometry
//! 2. **Missing geometry is a no-op** - the host skips calls until its
//!    [`GeometryProvider`] can produce a snapshot; nothing here panics
//! 3. **Deterministic** - the engine owns a seeded `ChaCha8Rng`; hosts
//!    supply the seed
//!
//! ## Example
//!
//! ```rust,ignore
//! use skitter_engine::{PlacementEngine, PlacementConfig};
//!
//! let mut engine = PlacementEngine::new(PlacementConfig::default(), 42);
//! if let Some(geometry) = provider.geometry() {
//!     engine.place_initial(&geometry);
//!     engine.relocate(&geometry);
//! }
//! let offset = engine.offset(); // apply as a 2D translation
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod bounds;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;

pub use bounds::OffsetBounds;
pub use config::PlacementConfig;
pub use engine::PlacementEngine;
pub use error::{ConfigError, ConfigResult};
pub use geometry::{Geometry, GeometryProvider, StaticGeometry};
