//! Time-derived seeding
//!
//! Both state words come from the same wall-clock reading, each XORed with a
//! different constant so they never coincide. Good enough to make runs differ,
//! useless as a source of entropy.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::rng::GeneratorState;

/// Mixed into the nanosecond timestamp to form `s0`
pub const SEED_MASK_S0: u64 = 0x9E37_79B9_7F4A_7C15;

/// Mixed into the nanosecond timestamp to form `s1`
pub const SEED_MASK_S1: u64 = 0xBF58_476D_1CE4_E5B9;

/// Build a state from a nanosecond timestamp
///
/// The result is never `(0, 0)` since the two masks differ.
///
/// # Example
/// ```
/// use xoroshiro_core_rs::seed::{seed_from_nanos, SEED_MASK_S0, SEED_MASK_S1};
///
/// let state = seed_from_nanos(0);
/// assert_eq!(state.s0, SEED_MASK_S0);
/// assert_eq!(state.s1, SEED_MASK_S1);
/// ```
pub fn seed_from_nanos(nanos: u64) -> GeneratorState {
    GeneratorState::new(nanos ^ SEED_MASK_S0, nanos ^ SEED_MASK_S1)
}

/// Seed from the current wall-clock time
pub fn seed_from_clock() -> GeneratorState {
    seed_from_system_time(SystemTime::now())
}

/// Seed from an arbitrary clock reading
///
/// Readings before the Unix epoch count as zero nanoseconds. Only the low
/// 64 bits of the nanosecond count are kept.
pub fn seed_from_system_time(now: SystemTime) -> GeneratorState {
    let nanos = match now.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_nanos() as u64,
        Err(err) => {
            tracing::warn!(
                behind = ?err.duration(),
                "system clock is before the Unix epoch, seeding from zero"
            );
            0
        }
    };
    let state = seed_from_nanos(nanos);
    tracing::debug!(nanos, s0 = state.s0, s1 = state.s1, "seeded from clock");
    state
}
