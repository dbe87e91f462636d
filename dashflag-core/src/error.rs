//! Error types for flag parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for dashflag operations.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagError {
    /// A string flag was the last argument, so no value followed it
    #[error("Missing value for flag: {0}")]
    MissingValue(String),

    /// A dash-prefixed token matched no registered flag (strict mode only)
    #[error("Unknown flag: {0}")]
    UnknownFlag(String),

    /// Parse options could not be read or decoded
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for dashflag operations
pub type Result<T> = std::result::Result<T, FlagError>;

impl From<toml::de::Error> for FlagError {
    fn from(err: toml::de::Error) -> Self {
        FlagError::Config(err.to_string())
    }
}

impl From<std::io::Error> for FlagError {
    fn from(err: std::io::Error) -> Self {
        FlagError::Config(format!("IO error: {}", err))
    }
}
