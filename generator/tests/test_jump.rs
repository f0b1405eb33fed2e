//! Tests for jump()
//!
//! The reference value was computed by raising the step's GF(2) transition
//! matrix to the power 2^64 and applying it to the seed.

use xoroshiro_core_rs::{GeneratorState, Xoroshiro128Plus};

#[test]
fn test_jump_reference_value() {
    let mut rng = Xoroshiro128Plus::new(1, 2);
    rng.jump();

    assert_eq!(
        rng.state(),
        GeneratorState::new(9_313_803_253_943_131_952, 9_182_824_480_621_940_261)
    );
}

#[test]
fn test_jump_commutes_with_step() {
    let mut jump_then_step = Xoroshiro128Plus::new(0xDEAD_BEEF, 0xCAFE_BABE);
    let mut step_then_jump = jump_then_step.clone();

    jump_then_step.jump();
    jump_then_step.next();

    step_then_jump.next();
    step_then_jump.jump();

    assert_eq!(jump_then_step.state(), step_then_jump.state());
}

#[test]
fn test_jumped_streams_differ() {
    let mut base = Xoroshiro128Plus::new(99, 100);
    let mut jumped = base.clone();
    jumped.jump();

    let a = base.take(16);
    let b = jumped.take(16);
    assert_ne!(a, b);
}

#[test]
fn test_jump_deterministic() {
    let mut a = Xoroshiro128Plus::new(3, 4);
    let mut b = Xoroshiro128Plus::new(3, 4);
    a.jump();
    a.jump();
    b.jump();
    b.jump();
    assert_eq!(a, b);
}
