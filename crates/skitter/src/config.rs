//! Aggregate tuning for the whole prompt, loadable from one TOML file.
//!
//! ```toml
//! [placement]
//! padding = 20.0
//!
//! [burst]
//! count_max = 12
//!
//! [accept]
//! transition_delay_ms = 600.0
//! ```

use serde::{Deserialize, Serialize};
use skitter_burst::BurstConfig;
use skitter_engine::PlacementConfig;
use thiserror::Error;

/// Timing for the accept transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AcceptConfig {
    /// Transition delay when reduced motion is requested: no burst, just
    /// a short beat.
    pub reduced_motion_delay_ms: f32,
    /// Transition delay in the animated path, long enough for the burst
    /// to visually develop.
    pub transition_delay_ms: f32,
}

impl Default for AcceptConfig {
    fn default() -> Self {
        Self {
            reduced_motion_delay_ms: 100.0,
            transition_delay_ms: 600.0,
        }
    }
}

impl AcceptConfig {
    /// Validates the delays.
    ///
    /// # Errors
    ///
    /// Returns [`SkitterConfigError`] for negative or non-finite delays.
    pub fn validate(&self) -> Result<(), SkitterConfigError> {
        for (field, value) in [
            ("reduced_motion_delay_ms", self.reduced_motion_delay_ms),
            ("transition_delay_ms", self.transition_delay_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SkitterConfigError::InvalidDelay { field, value });
            }
        }
        Ok(())
    }
}

/// Complete prompt tuning: placement, burst, and accept timing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkitterConfig {
    /// Placement engine tuning.
    pub placement: PlacementConfig,
    /// Burst animator tuning.
    pub burst: BurstConfig,
    /// Accept transition timing.
    pub accept: AcceptConfig,
}

impl SkitterConfig {
    /// Parses the aggregate tuning from a TOML document and validates
    /// every section.
    ///
    /// # Errors
    ///
    /// Returns [`SkitterConfigError`] for parse failures or any section
    /// rejecting a value.
    pub fn from_toml_str(toml: &str) -> Result<Self, SkitterConfigError> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns [`SkitterConfigError`] describing the first rejected value.
    pub fn validate(&self) -> Result<(), SkitterConfigError> {
        self.placement.validate()?;
        self.burst.validate()?;
        self.accept.validate()
    }
}

/// Errors from loading the aggregate tuning.
#[derive(Error, Debug)]
pub enum SkitterConfigError {
    /// The TOML document could not be parsed.
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The placement section was rejected.
    #[error("placement tuning: {0}")]
    Placement(#[from] skitter_engine::ConfigError),

    /// The burst section was rejected.
    #[error("burst tuning: {0}")]
    Burst(#[from] skitter_burst::BurstConfigError),

    /// An accept delay is negative or non-finite.
    #[error("invalid accept delay `{field}`: {value}")]
    InvalidDelay {
        /// The offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SkitterConfig::default().validate().is_ok());
    }

    #[test]
    fn test_sectioned_toml() {
        let config = SkitterConfig::from_toml_str(
            "[placement]\npadding = 24.0\n\n[accept]\ntransition_delay_ms = 500.0",
        )
        .unwrap();
        assert!((config.placement.padding - 24.0).abs() < f32::EPSILON);
        assert!((config.accept.transition_delay_ms - 500.0).abs() < f32::EPSILON);
        // Untouched sections keep their defaults.
        assert_eq!(config.burst.count_min, 8);
    }

    #[test]
    fn test_bad_section_surfaces_source() {
        let result = SkitterConfig::from_toml_str("[placement]\nmax_attempts = 0");
        assert!(matches!(result, Err(SkitterConfigError::Placement(_))));
    }

    #[test]
    fn test_negative_delay_rejected() {
        let result = SkitterConfig::from_toml_str("[accept]\ntransition_delay_ms = -1.0");
        assert!(matches!(result, Err(SkitterConfigError::InvalidDelay { .. })));
    }
}
