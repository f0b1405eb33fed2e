//! Session driver
//!
//! A session owns a validated config and the generator it seeds. It is the
//! only place that decides where a seed comes from and counts what has been
//! drawn, so a run can be checkpointed and resumed.

pub mod checkpoint;
mod engine;

pub use checkpoint::{compute_config_hash, CheckpointError, StateSnapshot};
pub use engine::{Session, SessionError};
