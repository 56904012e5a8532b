//! # SKITTER Core
//!
//! Shared geometry for the evasive prompt engine:
//! - `Vec2`: points, sizes, offsets, directions
//! - `Rect`: screen-space rectangles with a gap-aware overlap predicate
//!
//! ## Rules
//!
//! 1. **Value types only** - everything is `Copy`, nothing owns a resource
//! 2. **Fresh geometry** - rectangles describe the layout *right now*;
//!    callers must not cache them across frames

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod rect;
pub mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
