//! The 6-adic step function
//!
//! Routes on n mod 12 and applies one of four linear maps:
//!
//! | n mod 12 | next        | constant |
//! |----------|-------------|----------|
//! | 1        | (7n - 1)/6  | -1       |
//! | 5        | (7n - 5)/6  | -5       |
//! | 7        | (7n + 5)/6  | +5       |
//! | 11       | (7n + 1)/6  | +1       |
//!
//! On each defined branch 7n + k ≡ 0 (mod 6), so the division is exact.
//! Any other residue has no successor and terminates a chain.

use std::fmt;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// The constant k applied in one step, with next = (7n + k)/6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepConstant {
    /// k = -1, applied when n ≡ 1 (mod 12)
    MinusOne,
    /// k = -5, applied when n ≡ 5 (mod 12)
    MinusFive,
    /// k = +5, applied when n ≡ 7 (mod 12)
    PlusFive,
    /// k = +1, applied when n ≡ 11 (mod 12)
    PlusOne,
}

impl StepConstant {
    /// The signed value of k.
    pub fn offset(self) -> i8 {
        match self {
            StepConstant::MinusOne => -1,
            StepConstant::MinusFive => -5,
            StepConstant::PlusFive => 5,
            StepConstant::PlusOne => 1,
        }
    }
}

impl fmt::Display for StepConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepConstant::MinusOne => "-1",
            StepConstant::MinusFive => "-5",
            StepConstant::PlusFive => "+5",
            StepConstant::PlusOne => "+1",
        })
    }
}

/// Residue of n modulo 12. Determines which map, if any, applies.
pub fn residue_mod_12(n: &BigUint) -> u32 {
    // n % 12 always fits in a u32.
    (n % 12u32).to_u32().unwrap_or(0)
}

/// Compute the next value in the 6-adic sequence.
///
/// Returns the successor and the constant applied, or `None` when
/// n mod 12 is outside {1, 5, 7, 11}. The `None` case is a normal
/// terminal signal, not an error.
pub fn step(n: &BigUint) -> Option<(BigUint, StepConstant)> {
    match residue_mod_12(n) {
        1 => Some(((n * 7u32 - 1u32) / 6u32, StepConstant::MinusOne)),
        5 => Some(((n * 7u32 - 5u32) / 6u32, StepConstant::MinusFive)),
        7 => Some(((n * 7u32 + 5u32) / 6u32, StepConstant::PlusFive)),
        11 => Some(((n * 7u32 + 1u32) / 6u32, StepConstant::PlusOne)),
        _ => None,
    }
}
