//! Property-based tests for the step function and chain walker.
//!
//! Cross-checks the recurrence against direct arithmetic on signed
//! big integers, and the walker's chain contents against an independent
//! trial-division primality check.

use hexad_core::{step, ChainVerifier, MillerRabin, PrimalityOracle};
use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;

/// Independent reference oracle: plain trial division.
fn is_prime_naive(n: &BigUint) -> bool {
    let n = match u64::try_from(n) {
        Ok(n) => n,
        Err(_) => panic!("reference oracle only handles u64-range inputs"),
    };
    if n < 2 {
        return false;
    }
    let mut d = 2u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

proptest! {
    #[test]
    fn defined_residues_divide_exactly(n in 1u64..u64::MAX / 8) {
        let big = BigUint::from(n);
        match n % 12 {
            1 | 5 | 7 | 11 => {
                let (next, k) = step(&big).expect("defined residue must step");
                // 6 * next == 7n + k, exactly.
                let lhs = BigInt::from(next) * 6;
                let rhs = BigInt::from(n) * 7 + BigInt::from(k.offset());
                prop_assert_eq!(lhs, rhs);
            }
            _ => prop_assert!(step(&big).is_none()),
        }
    }

    #[test]
    fn chain_never_exceeds_step_bound(n0 in 1u64..1_000_000, max_steps in 0usize..16) {
        let v = ChainVerifier::new(MillerRabin)
            .verify(&BigUint::from(n0), max_steps)
            .unwrap();
        prop_assert!(v.chain.len() <= max_steps);
        prop_assert!(v.steps.len() <= max_steps);
    }

    #[test]
    fn every_chain_element_is_prime(n0 in 1u64..1_000_000) {
        let v = ChainVerifier::new(MillerRabin)
            .verify(&BigUint::from(n0), 12)
            .unwrap();
        for value in v.chain.values() {
            prop_assert!(is_prime_naive(value), "chain element {value} is composite");
        }
    }

    #[test]
    fn verification_is_deterministic(n0 in 1u64..1_000_000, max_steps in 0usize..12) {
        let verifier = ChainVerifier::new(MillerRabin);
        let n0 = BigUint::from(n0);
        let a = verifier.verify(&n0, max_steps).unwrap();
        let b = verifier.verify(&n0, max_steps).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn oracle_matches_reference(n in 0u64..50_000) {
        let big = BigUint::from(n);
        prop_assert_eq!(MillerRabin.is_prime(&big), is_prime_naive(&big));
    }
}
