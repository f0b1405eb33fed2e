//! Deterministic pseudo-random number generation
//!
//! Implements xoroshiro128+ (parameters 55/14/36). The state is an explicit
//! owned value: either thread it through [`step`] or hold it in a
//! [`Xoroshiro128Plus`].
//!
//! Not a CSPRNG. Use the operating system's entropy source for anything
//! security relevant.

mod state;
mod xoroshiro;

pub use state::{rotate_left, step, GeneratorState, ROTATE_A, ROTATE_C, SHIFT_B};
pub use xoroshiro::{Xoroshiro128Plus, JUMP};
