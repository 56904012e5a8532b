//! Burst configuration errors.
//!
//! Spawning never fails; only tuning validation does.

use thiserror::Error;

/// Errors that can occur while loading burst tuning.
#[derive(Error, Debug)]
pub enum BurstConfigError {
    /// The TOML document could not be parsed.
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A tuning value is outside its legal range.
    #[error("invalid tuning value for `{field}`: {value}")]
    InvalidValue {
        /// The offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A min/max pair is inverted.
    #[error("inverted range for `{field}`: min {min} > max {max}")]
    InvertedRange {
        /// The offending field.
        field: &'static str,
        /// Range minimum.
        min: f32,
        /// Range maximum.
        max: f32,
    },

    /// A burst needs at least one particle.
    #[error("particle count range must start at 1 or more")]
    ZeroParticles,
}

/// Result type for burst configuration loading.
pub type BurstConfigResult<T> = Result<T, BurstConfigError>;
