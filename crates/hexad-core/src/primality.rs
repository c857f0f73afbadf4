//! Primality oracle
//!
//! The chain walker needs one capability: decide whether an arbitrary
//! precision integer is prime. The trait keeps that seam explicit; the
//! shipped implementation is Miller-Rabin with a fixed witness set.
//!
//! With witnesses {2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37} the strong
//! probable prime test is a proven primality test for all n below
//! 3.317e24 (Sorenson & Webster, 2015). The extra witnesses up to 97 make
//! a false positive above that bound astronomically unlikely while keeping
//! the oracle fully deterministic.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Decides primality of arbitrary-precision integers.
///
/// Implementations must be deterministic and side-effect free: the chain
/// walker relies on identical inputs producing identical chains.
pub trait PrimalityOracle {
    /// Returns true iff `n` is prime.
    fn is_prime(&self, n: &BigUint) -> bool;
}

/// Deterministic Miller-Rabin primality test.
#[derive(Debug, Clone, Copy, Default)]
pub struct MillerRabin;

/// Trial-division primes. Doubles as the witness set.
const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

impl PrimalityOracle for MillerRabin {
    fn is_prime(&self, n: &BigUint) -> bool {
        if n < &BigUint::from(2u32) {
            return false;
        }
        if n.is_even() {
            return *n == BigUint::from(2u32);
        }
        for p in SMALL_PRIMES {
            let p = BigUint::from(p);
            if *n == p {
                return true;
            }
            if (n % &p).is_zero() {
                return false;
            }
        }
        // n is odd and > 97 here, so every witness is a valid base < n.
        strong_probable_prime_all(n, &SMALL_PRIMES)
    }
}

/// Runs the strong probable prime test for every witness in `bases`.
fn strong_probable_prime_all(n: &BigUint, bases: &[u32]) -> bool {
    let one = BigUint::one();
    let n_minus_1 = n - &one;
    // n - 1 = d * 2^s with d odd
    let s = n_minus_1.trailing_zeros().unwrap_or(0);
    let d = &n_minus_1 >> s;

    'witness: for &a in bases {
        let mut x = BigUint::from(a).modpow(&d, n);
        if x == one || x == n_minus_1 {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
