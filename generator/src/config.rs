//! Generator configuration
//!
//! Loaded from JSON, e.g.
//!
//! ```json
//! { "count": 5, "seed": { "s0": 1, "s1": 2 }, "jumps": 1 }
//! ```
//!
//! Every field is optional. Without a seed the session seeds from the clock.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::GeneratorState;

/// Number of outputs printed when nothing else is configured
pub const DEFAULT_COUNT: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed (0, 0) is a fixed point and would only produce zeros")]
    ZeroSeed,
}

/// What a session should generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of outputs to draw
    pub count: usize,
    /// Fixed seed; `None` means seed from the clock
    pub seed: Option<GeneratorState>,
    /// Jumps applied right after seeding
    pub jumps: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: None,
            jumps: 0,
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a JSON config
    ///
    /// # Example
    /// ```
    /// use xoroshiro_core_rs::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::from_json_str(r#"{"count": 3}"#).unwrap();
    /// assert_eq!(config.count, 3);
    /// assert!(config.seed.is_none());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_json_str(&text)
    }

    /// Reject configurations the generator cannot run meaningfully
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.seed {
            Some(seed) if seed.is_zero() => Err(ConfigError::ZeroSeed),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prints_ten() {
        let config = GeneratorConfig::default();
        assert_eq!(config.count, 10);
        assert_eq!(config.jumps, 0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = GeneratorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }
}
