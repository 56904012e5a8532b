//! # Placement Tuning
//!
//! All placement constants live here and can be overridden from a TOML
//! file loaded once at startup. The defaults are the shipped behavior;
//! validation rejects values that would break the search's termination or
//! containment guarantees.

use serde::{Deserialize, Serialize};
use skitter_core::Vec2;

use crate::error::{ConfigError, ConfigResult};

/// Tuning for the placement engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Padding between the container edge and any committed position.
    pub padding: f32,
    /// Minimum clearance kept between the decline and accept rectangles.
    pub gap: f32,
    /// Resting anchor of the decline control, relative to the container
    /// center.
    pub base_offset: Vec2,
    /// Random draws attempted before the deterministic fallback engages.
    pub max_attempts: u32,
    /// Minimum travel distance per relocation; closer draws are re-stepped.
    pub min_travel: f32,
    /// Extra magnitude added on top of `min_travel` when re-stepping, so a
    /// re-step travels a uniform distance in `[min_travel, min_travel +
    /// travel_spread]`.
    pub travel_spread: f32,
    /// Distance used by the fallback and by the post-resize push.
    pub fallback_distance: f32,
    /// Horizontal reach of the initial-placement candidates.
    pub initial_reach_x: f32,
    /// Vertical reach of the initial-placement candidates.
    pub initial_reach_y: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            padding: 20.0,
            gap: 20.0,
            base_offset: Vec2::new(120.0, -28.0),
            max_attempts: 30,
            min_travel: 80.0,
            travel_spread: 100.0,
            fallback_distance: 180.0,
            initial_reach_x: 250.0,
            initial_reach_y: 150.0,
        }
    }
}

impl PlacementConfig {
    /// Parses tuning from a TOML document and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the document fails to parse or a value
    /// is outside its legal range.
    pub fn from_toml_str(toml: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all tuning values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first rejected value.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        for (field, value) in [
            ("padding", self.padding),
            ("gap", self.gap),
            ("travel_spread", self.travel_spread),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        for (field, value) in [
            ("min_travel", self.min_travel),
            ("fallback_distance", self.fallback_distance),
            ("initial_reach_x", self.initial_reach_x),
            ("initial_reach_y", self.initial_reach_y),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        Ok(())
    }
}
