//! xoroshiro128+ random number generator
//!
//! Fast, small-state PRNG with good statistical quality in its upper bits.
//! It is NOT suitable for cryptographic use: 128 bits of state are fully
//! recoverable from a handful of outputs.
//!
//! # Determinism
//!
//! Same state → same sequence of outputs. `state()` and `from_state()` allow
//! a run to be paused and replayed exactly.

use serde::{Deserialize, Serialize};

use super::state::{step, GeneratorState};

/// Jump polynomial for the 55/14/36 parameter set, low word first
///
/// Applying it is equivalent to 2^64 calls to [`Xoroshiro128Plus::next`].
pub const JUMP: [u64; 2] = [0xBEAC_0467_EBA5_FACB, 0xD86B_048B_86AA_9922];

/// Owned xoroshiro128+ generator
///
/// # Example
/// ```
/// use xoroshiro_core_rs::Xoroshiro128Plus;
///
/// let mut rng = Xoroshiro128Plus::new(1, 2);
/// assert_eq!(rng.next(), 3);
/// let die = rng.range(1, 7); // [1, 7)
/// assert!((1..7).contains(&die));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xoroshiro128Plus {
    state: GeneratorState,
}

impl Xoroshiro128Plus {
    /// Create a generator from two seed words
    ///
    /// `(0, 0)` is accepted but yields only zeros.
    pub fn new(s0: u64, s1: u64) -> Self {
        Self::from_state(GeneratorState::new(s0, s1))
    }

    /// Recreate a generator from a previously captured state
    ///
    /// # Example
    /// ```
    /// use xoroshiro_core_rs::Xoroshiro128Plus;
    ///
    /// let mut rng = Xoroshiro128Plus::new(42, 7);
    /// rng.next();
    /// let saved = rng.state();
    ///
    /// let mut replay = Xoroshiro128Plus::from_state(saved);
    /// assert_eq!(rng.next(), replay.next());
    /// ```
    pub fn from_state(state: GeneratorState) -> Self {
        Self { state }
    }

    /// Current state (for checkpointing/replay)
    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// Generate the next 64-bit output and advance the state
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        let (result, next) = step(self.state);
        self.state = next;
        result
    }

    /// Next 32-bit output
    ///
    /// The lowest bits have linear dependencies, so the upper half is used.
    pub fn next_u32(&mut self) -> u32 {
        (self.next() >> 32) as u32
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// # Example
    /// ```
    /// use xoroshiro_core_rs::Xoroshiro128Plus;
    ///
    /// let mut rng = Xoroshiro128Plus::new(12345, 678);
    /// let p = rng.next_f64();
    /// assert!(p >= 0.0 && p < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let range_size = max.wrapping_sub(min) as u64;
        min.wrapping_add((self.next() % range_size) as i64)
    }

    /// Draw `count` outputs in order
    pub fn take(&mut self, count: usize) -> Vec<u64> {
        (0..count).map(|_| self.next()).collect()
    }

    /// Advance the state as if [`next`](Self::next) had been called 2^64 times
    ///
    /// Jumping a cloned generator gives a second stream that will not overlap
    /// the first for 2^64 outputs.
    ///
    /// # Example
    /// ```
    /// use xoroshiro_core_rs::Xoroshiro128Plus;
    ///
    /// let a = Xoroshiro128Plus::new(1, 2);
    /// let mut b = a.clone();
    /// b.jump();
    /// assert_ne!(a.state(), b.state());
    /// ```
    pub fn jump(&mut self) {
        let mut acc = GeneratorState::new(0, 0);
        for word in JUMP {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    acc.s0 ^= self.state.s0;
                    acc.s1 ^= self.state.s1;
                }
                self.next();
            }
        }
        self.state = acc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "min must be less than max")]
    fn test_range_invalid_bounds() {
        let mut rng = Xoroshiro128Plus::new(12345, 1);
        rng.range(100, 50);
    }

    #[test]
    fn test_range_full_i64_span() {
        let mut rng = Xoroshiro128Plus::new(3, 9);
        for _ in 0..100 {
            let v = rng.range(i64::MIN, i64::MAX);
            assert!(v < i64::MAX);
        }
    }

    #[test]
    fn test_next_f64_in_range() {
        let mut rng = Xoroshiro128Plus::new(12345, 54321);

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!(
                (0.0..1.0).contains(&val),
                "next_f64() produced value {} outside [0.0, 1.0)",
                val
            );
        }
    }

    #[test]
    fn test_next_u32_is_upper_half() {
        let mut a = Xoroshiro128Plus::new(5, 6);
        let mut b = a.clone();
        assert_eq!(a.next_u32() as u64, b.next() >> 32);
    }

    #[test]
    fn test_jump_from_zero_stays_zero() {
        let mut rng = Xoroshiro128Plus::new(0, 0);
        rng.jump();
        assert!(rng.state().is_zero());
    }
}
