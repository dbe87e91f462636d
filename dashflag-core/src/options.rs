//! Parse options.
//!
//! Options can be built in code or loaded from TOML, e.g.
//!
//! ```toml
//! unknown_flags = "reject"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FlagError, Result};

/// What to do with a dash-prefixed token that matches no registered flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFlagPolicy {
    /// Skip the token and keep scanning
    #[default]
    Ignore,
    /// Stop and report [`FlagError::UnknownFlag`]
    Reject,
}

/// Options controlling a single parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub unknown_flags: UnknownFlagPolicy,
}

impl ParseOptions {
    /// Options that reject unknown flags
    pub fn strict() -> Self {
        Self {
            unknown_flags: UnknownFlagPolicy::Reject,
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| FlagError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        Self::from_toml_str(&content)
    }
}
