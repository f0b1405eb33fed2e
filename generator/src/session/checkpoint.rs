//! Checkpoint - Save/Load Generator State
//!
//! A snapshot is the generator state plus how many outputs were drawn, tagged
//! with a hash of the config fields that shape the stream.
//!
//! # Invariants
//!
//! - **Determinism**: resuming yields exactly the outputs the original session
//!   would have produced next
//! - **Config Matching**: a snapshot only loads under a config with the same
//!   seed and jump count (`count` is free to change)
//! - **Non-zero State**: a `(0, 0)` state is rejected

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config::GeneratorConfig;
use crate::rng::GeneratorState;

#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config mismatch: snapshot was taken under {expected}, current config hashes to {actual}")]
    ConfigMismatch { expected: String, actual: String },

    #[error("Snapshot state is (0, 0) and cannot be resumed")]
    ZeroState,
}

/// Serialized generator position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// State at the time of the snapshot
    pub state: GeneratorState,

    /// Outputs drawn since seeding
    pub outputs_drawn: u64,

    /// SHA256 of the stream-defining config fields
    pub config_hash: String,
}

impl StateSnapshot {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that this snapshot can be resumed under `config`
    pub fn validate(&self, config: &GeneratorConfig) -> Result<(), CheckpointError> {
        if self.state.is_zero() {
            return Err(CheckpointError::ZeroState);
        }

        let actual = compute_config_hash(config)?;
        if actual != self.config_hash {
            return Err(CheckpointError::ConfigMismatch {
                expected: self.config_hash.clone(),
                actual,
            });
        }
        Ok(())
    }
}

/// Fields of [`GeneratorConfig`] that determine the output stream
#[derive(Serialize)]
struct StreamIdentity<'a> {
    seed: &'a Option<GeneratorState>,
    jumps: u32,
}

/// Hash the stream-defining part of a config
///
/// `StreamIdentity` fixes the field order, so the JSON is already canonical.
/// `count` is left out: resuming may draw a different number of outputs.
///
/// # Example
/// ```
/// use xoroshiro_core_rs::{session::compute_config_hash, GeneratorConfig};
///
/// let a = GeneratorConfig { count: 1, ..GeneratorConfig::default() };
/// let b = GeneratorConfig { count: 99, ..GeneratorConfig::default() };
/// assert_eq!(compute_config_hash(&a).unwrap(), compute_config_hash(&b).unwrap());
/// ```
pub fn compute_config_hash(config: &GeneratorConfig) -> Result<String, CheckpointError> {
    let identity = StreamIdentity {
        seed: &config.seed,
        jumps: config.jumps,
    };
    let json = serde_json::to_string(&identity)?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
