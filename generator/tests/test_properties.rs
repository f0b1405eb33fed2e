//! Property tests for the step function and jump

use proptest::prelude::*;

use xoroshiro_core_rs::rng::{rotate_left, step};
use xoroshiro_core_rs::{GeneratorState, Xoroshiro128Plus};

fn state_xor(a: GeneratorState, b: GeneratorState) -> GeneratorState {
    GeneratorState::new(a.s0 ^ b.s0, a.s1 ^ b.s1)
}

proptest! {
    #[test]
    fn output_is_wrapping_sum(s0 in any::<u64>(), s1 in any::<u64>()) {
        let (out, _) = step(GeneratorState::new(s0, s1));
        prop_assert_eq!(out, s0.wrapping_add(s1));
    }

    #[test]
    fn rotate_left_inverts_with_complement(x in any::<u64>(), k in 1u32..64) {
        prop_assert_eq!(rotate_left(rotate_left(x, k), 64 - k), x);
    }

    #[test]
    fn same_seed_same_sequence(s0 in any::<u64>(), s1 in any::<u64>()) {
        let mut a = Xoroshiro128Plus::new(s0, s1);
        let mut b = Xoroshiro128Plus::new(s0, s1);
        prop_assert_eq!(a.take(32), b.take(32));
    }

    #[test]
    fn distinct_seeds_diverge_after_one_step(
        a in any::<(u64, u64)>(),
        b in any::<(u64, u64)>(),
    ) {
        prop_assume!(a != b);
        let (_, next_a) = step(GeneratorState::new(a.0, a.1));
        let (_, next_b) = step(GeneratorState::new(b.0, b.1));
        prop_assert_ne!(next_a, next_b);
    }

    #[test]
    fn state_update_is_linear(
        a in any::<(u64, u64)>(),
        b in any::<(u64, u64)>(),
    ) {
        let a = GeneratorState::new(a.0, a.1);
        let b = GeneratorState::new(b.0, b.1);
        let (_, next_ab) = step(state_xor(a, b));
        let (_, next_a) = step(a);
        let (_, next_b) = step(b);
        prop_assert_eq!(next_ab, state_xor(next_a, next_b));
    }

    #[test]
    fn nonzero_states_stay_nonzero(s0 in any::<u64>(), s1 in any::<u64>()) {
        prop_assume!(s0 != 0 || s1 != 0);
        let mut state = GeneratorState::new(s0, s1);
        for _ in 0..16 {
            state = step(state).1;
            prop_assert!(!state.is_zero());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn jump_commutes_with_step(s0 in any::<u64>(), s1 in any::<u64>()) {
        let mut a = Xoroshiro128Plus::new(s0, s1);
        let mut b = a.clone();

        a.jump();
        a.next();
        b.next();
        b.jump();

        prop_assert_eq!(a.state(), b.state());
    }
}
