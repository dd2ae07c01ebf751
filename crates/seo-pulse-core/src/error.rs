//! Error types for seo-pulse-core.
//!
//! Scoring itself never fails: missing or malformed input degrades to a low
//! score plus an [`Issue`](crate::health::Issue). The only fallible surface
//! is configuration.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A scoring threshold is out of range or out of order.
    #[error("invalid threshold `{field}`: {reason}")]
    InvalidThreshold {
        /// Dotted path of the offending setting (e.g. `scoring.title.ideal_min`).
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
