//! Error types for the expiry cache
//!
//! Store operations are total and report absence through `Option`/`bool`.
//! The only fallible surface is loading configuration.

use thiserror::Error;

// == Config Error Enum ==
/// Errors raised while building a [`Config`](crate::Config).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable is set but does not parse
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    /// The sweep interval must be non-zero
    #[error("Sweep interval must be greater than zero")]
    ZeroInterval,
}

// == Result Type Alias ==
/// Convenience Result type for the expiry cache.
pub type Result<T> = std::result::Result<T, ConfigError>;
