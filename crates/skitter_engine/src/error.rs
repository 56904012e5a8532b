//! # Placement Error Types
//!
//! The only fallible surface is configuration loading. Runtime placement
//! never errors: missing geometry is a caller-side no-op and the search
//! always terminates with a committed offset.

use thiserror::Error;

/// Errors that can occur while loading placement tuning.
#[derive(Error, Debug)]
pub enum ConfigError {
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

    /// The bounded search needs at least one attempt.
    #[error("attempt cap must be at least 1")]
    ZeroAttempts,
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
