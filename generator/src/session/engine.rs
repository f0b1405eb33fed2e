//! Session engine
//!
//! Seeds once, applies configured jumps, then hands out outputs in order.

use thiserror::Error;

use super::checkpoint::{compute_config_hash, CheckpointError, StateSnapshot};
use crate::config::{ConfigError, GeneratorConfig};
use crate::rng::{GeneratorState, Xoroshiro128Plus};
use crate::seed::seed_from_clock;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("Checkpoint error: {0}")]
    Checkpoint(#[from] CheckpointError),
}

/// A seeded generator plus the config it runs under
///
/// # Example
/// ```
/// use xoroshiro_core_rs::{GeneratorConfig, GeneratorState, Session};
///
/// let config = GeneratorConfig {
///     count: 3,
///     seed: Some(GeneratorState::new(1, 0)),
///     jumps: 0,
/// };
/// let mut session = Session::new(config).unwrap();
/// let outputs = session.run();
/// assert_eq!(outputs[0], 1);
/// assert_eq!(session.outputs_drawn(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    config: GeneratorConfig,
    rng: Xoroshiro128Plus,
    outputs_drawn: u64,
}

impl Session {
    /// Validate `config`, seed, and apply jumps
    ///
    /// Seeds from the clock when the config carries no seed.
    pub fn new(config: GeneratorConfig) -> Result<Self, SessionError> {
        config.validate()?;

        let seed = match config.seed {
            Some(seed) => seed,
            None => seed_from_clock(),
        };

        let mut rng = Xoroshiro128Plus::from_state(seed);
        for _ in 0..config.jumps {
            rng.jump();
        }

        tracing::debug!(
            s0 = seed.s0,
            s1 = seed.s1,
            jumps = config.jumps,
            count = config.count,
            "session started"
        );

        Ok(Self {
            config,
            rng,
            outputs_drawn: 0,
        })
    }

    /// Resume from a snapshot taken under a matching config
    pub fn from_snapshot(
        config: GeneratorConfig,
        snapshot: &StateSnapshot,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        snapshot.validate(&config)?;

        tracing::debug!(
            outputs_drawn = snapshot.outputs_drawn,
            "session resumed from snapshot"
        );

        Ok(Self {
            config,
            rng: Xoroshiro128Plus::from_state(snapshot.state),
            outputs_drawn: snapshot.outputs_drawn,
        })
    }

    /// Draw one output
    pub fn draw(&mut self) -> u64 {
        self.outputs_drawn += 1;
        self.rng.next()
    }

    /// Draw the configured number of outputs
    ///
    /// Collects into a `Vec`; call [`draw`](Self::draw) in a loop to stream large counts.
    pub fn run(&mut self) -> Vec<u64> {
        (0..self.config.count).map(|_| self.draw()).collect()
    }

    /// Capture the current position
    pub fn snapshot(&self) -> Result<StateSnapshot, SessionError> {
        Ok(StateSnapshot {
            state: self.rng.state(),
            outputs_drawn: self.outputs_drawn,
            config_hash: compute_config_hash(&self.config)?,
        })
    }

    pub fn state(&self) -> GeneratorState {
        self.rng.state()
    }

    pub fn outputs_drawn(&self) -> u64 {
        self.outputs_drawn
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}
