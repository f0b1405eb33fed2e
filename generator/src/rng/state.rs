//! Generator state and the xoroshiro128+ step function
//!
//! The whole generator is two 64-bit words. The step function is pure: it
//! takes a state by value and hands back the output together with the next
//! state, so callers never share hidden mutable state.
//!
//! # Algorithm
//!
//! ```text
//! result = s0 + s1            (wrapping)
//! s1     = s1 ^ s0
//! s0'    = rotl(s0, 55) ^ s1 ^ (s1 << 14)
//! s1'    = rotl(s1, 36)
//! ```

use serde::{Deserialize, Serialize};

/// Rotation applied to `s0` when computing the next `s0`
pub const ROTATE_A: u32 = 55;

/// Left shift applied to the mixed `s1`
pub const SHIFT_B: u32 = 14;

/// Rotation applied to the mixed `s1` when computing the next `s1`
pub const ROTATE_C: u32 = 36;

/// The two state words of a xoroshiro128+ generator
///
/// The pair must never be `(0, 0)`: that state maps to itself and the
/// generator then emits zeros forever. The step function does not guard
/// against it; configuration and checkpoint loading reject it instead.
///
/// # Example
/// ```
/// use xoroshiro_core_rs::GeneratorState;
///
/// let state = GeneratorState::new(1, 0);
/// assert!(!state.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratorState {
    pub s0: u64,
    pub s1: u64,
}

impl GeneratorState {
    /// Build a state from its two words
    pub const fn new(s0: u64, s1: u64) -> Self {
        Self { s0, s1 }
    }

    /// True for the absorbing all-zero state
    pub const fn is_zero(&self) -> bool {
        self.s0 == 0 && self.s1 == 0
    }
}

/// Circular left rotation of a 64-bit word
///
/// Equivalent to `(x << k) | (x >> (64 - k))` for `k` in `[1, 63]`.
///
/// # Example
/// ```
/// use xoroshiro_core_rs::rng::rotate_left;
///
/// assert_eq!(rotate_left(1, 63), 1 << 63);
/// assert_eq!(rotate_left(1 << 63, 1), 1);
/// ```
#[inline]
pub const fn rotate_left(x: u64, k: u32) -> u64 {
    x.rotate_left(k)
}

/// Advance `state` by one step
///
/// Returns the output computed from the pre-update words and the next state.
///
/// # Example
/// ```
/// use xoroshiro_core_rs::{rng::step, GeneratorState};
///
/// let (out, next) = step(GeneratorState::new(1, 0));
/// assert_eq!(out, 1);
/// assert_eq!(next.s1, 1 << 36);
/// ```
#[inline]
pub const fn step(state: GeneratorState) -> (u64, GeneratorState) {
    let s0 = state.s0;
    let s1 = state.s1 ^ s0;
    let result = state.s0.wrapping_add(state.s1);

    let next = GeneratorState {
        s0: rotate_left(s0, ROTATE_A) ^ s1 ^ (s1 << SHIFT_B),
        s1: rotate_left(s1, ROTATE_C),
    };
    (result, next)
}
