//! Burst tuning, loadable from TOML.

use serde::{Deserialize, Serialize};

use crate::error::{BurstConfigError, BurstConfigResult};

/// Tuning for particle generation.
///
/// All distances and sizes are in screen units; delays and durations are
/// milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    /// Minimum particles per burst (inclusive).
    pub count_min: u32,
    /// Maximum particles per burst (inclusive).
    pub count_max: u32,
    /// Minimum travel distance from the origin.
    pub distance_min: f32,
    /// Maximum travel distance from the origin.
    pub distance_max: f32,
    /// Minimum particle size.
    pub size_min: f32,
    /// Maximum particle size.
    pub size_max: f32,
    /// Maximum start delay in milliseconds (minimum is zero).
    pub delay_max_ms: f32,
    /// Minimum animation duration in milliseconds.
    pub duration_min_ms: f32,
    /// Maximum animation duration in milliseconds.
    pub duration_max_ms: f32,
    /// Angular jitter in radians applied around the even spread, centered
    /// on zero (a jitter of 0.5 perturbs each angle by up to ±0.25).
    pub angle_jitter: f32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count_min: 8,
            count_max: 12,
            distance_min: 60.0,
            distance_max: 100.0,
            size_min: 16.0,
            size_max: 32.0,
            delay_max_ms: 100.0,
            duration_min_ms: 600.0,
            duration_max_ms: 800.0,
            angle_jitter: 0.5,
        }
    }
}

impl BurstConfig {
    /// Parses tuning from a TOML document and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`BurstConfigError`] if the document fails to parse or a
    /// value is outside its legal range.
    pub fn from_toml_str(toml: &str) -> BurstConfigResult<Self> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all tuning values.
    ///
    /// # Errors
    ///
    /// Returns [`BurstConfigError`] describing the first rejected value.
    pub fn validate(&self) -> BurstConfigResult<()> {
        if self.count_min == 0 {
            return Err(BurstConfigError::ZeroParticles);
        }
        if self.count_min > self.count_max {
            #[allow(clippy::cast_precision_loss)]
            return Err(BurstConfigError::InvertedRange {
                field: "count",
                min: self.count_min as f32,
                max: self.count_max as f32,
            });
        }

        for (field, min, max) in [
            ("distance", self.distance_min, self.distance_max),
            ("size", self.size_min, self.size_max),
            ("duration_ms", self.duration_min_ms, self.duration_max_ms),
        ] {
            if !min.is_finite() || !max.is_finite() || min < 0.0 {
                return Err(BurstConfigError::InvalidValue { field, value: min });
            }
            if min > max {
                return Err(BurstConfigError::InvertedRange { field, min, max });
            }
        }

        for (field, value) in [
            ("delay_max_ms", self.delay_max_ms),
            ("angle_jitter", self.angle_jitter),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BurstConfigError::InvalidValue { field, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(BurstConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_count_rejected() {
        let result = BurstConfig::from_toml_str("count_min = 12\ncount_max = 8");
        assert!(matches!(
            result,
            Err(BurstConfigError::InvertedRange { field: "count", .. })
        ));
    }

    #[test]
    fn test_inverted_distance_rejected() {
        let result = BurstConfig::from_toml_str("distance_min = 200.0");
        assert!(matches!(
            result,
            Err(BurstConfigError::InvertedRange { field: "distance", .. })
        ));
    }

    #[test]
    fn test_zero_particles_rejected() {
        let result = BurstConfig::from_toml_str("count_min = 0");
        assert!(matches!(result, Err(BurstConfigError::ZeroParticles)));
    }
}
