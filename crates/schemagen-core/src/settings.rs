//! Generator-wide settings.

use crate::constraints::DEFAULT_MAX_ATTEMPTS;
use crate::schema::SchemaError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default upper length for strings whose schema sets no `maxLength`.
pub const DEFAULT_MAX_LENGTH: usize = 255;

/// Retry cap for synthesizing a missing bound around `multipleOf`.
pub const DEFAULT_RANGE_SYNTHESIS_ATTEMPTS: usize = 100;

/// Tunables shared by every generation call of one generator instance.
///
/// # YAML Format
///
/// Every key is optional:
/// ```yaml
/// max_attempts: 1250
/// default_max_length: 255
/// range_synthesis_attempts: 100
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Budget for bounded searches (patterns, unconstrained formats, free text)
    pub max_attempts: usize,
    /// Length ceiling used when a string has no `maxLength`
    pub default_max_length: usize,
    /// Retry cap for synthesizing a missing numeric bound
    pub range_synthesis_attempts: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            default_max_length: DEFAULT_MAX_LENGTH,
            range_synthesis_attempts: DEFAULT_RANGE_SYNTHESIS_ATTEMPTS,
        }
    }
}

impl GeneratorSettings {
    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load settings from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}
