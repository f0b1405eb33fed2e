//! xoroshiro128+ core
//!
//! A small, fast, non-cryptographic pseudo-random number generator and the
//! plumbing to seed, configure, checkpoint and drive it.
//!
//! # Architecture
//!
//! - **rng**: Generator state, step function, jump
//! - **seed**: Time-derived seeding
//! - **config**: JSON configuration
//! - **session**: Seeded run with checkpoint/resume
//!
//! # Critical Invariants
//!
//! 1. Same state → same output sequence
//! 2. Outputs are `s0 + s1` (wrapping) on the pre-update state
//! 3. A `(0, 0)` state only ever produces zeros, so it is never seeded

pub mod config;
pub mod rng;
pub mod seed;
pub mod session;

pub use config::{ConfigError, GeneratorConfig};
pub use rng::{GeneratorState, Xoroshiro128Plus};
pub use session::{CheckpointError, Session, SessionError, StateSnapshot};
