//! Chain verification
//!
//! `ChainVerifier` walks the 6-adic recurrence from a starting value,
//! gating every iterate on the primality oracle. The walk stops at the
//! step bound, at the first composite iterate, or at a residue outside
//! the defined classes. The verified chain is append-only while the walk
//! runs and immutable afterwards.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

use crate::error::{HexadError, HexadResult};
use crate::primality::PrimalityOracle;
use crate::step::{residue_mod_12, step, StepConstant};

/// An ordered sequence of iterates, each verified prime at insertion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chain(Vec<BigUint>);

impl Chain {
    /// Number of verified elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no iterate survived verification.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The verified elements in discovery order.
    pub fn values(&self) -> &[BigUint] {
        &self.0
    }

    /// Consumes the chain, yielding the underlying values.
    pub fn into_values(self) -> Vec<BigUint> {
        self.0
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

/// Why the walk stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// The step bound was reached with the chain still intact.
    MaxSteps,
    /// The current iterate tested composite; it was not appended.
    Composite(BigUint),
    /// The last appended iterate has residue mod 12 outside {1, 5, 7, 11}.
    InvalidResidue(u32),
}

/// One entry of the per-step trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// 1-based step index.
    pub index: usize,
    /// The iterate examined at this step.
    pub value: BigUint,
    /// Oracle verdict for `value`.
    pub prime: bool,
    /// Constant applied and successor produced, when the step advanced.
    pub applied: Option<(StepConstant, BigUint)>,
}

/// Outcome of a verification walk.
///
/// The chain carries no termination detail; composite and invalid-residue
/// breaks are distinguished only here and in the trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// The verified chain.
    pub chain: Chain,
    /// Per-step trace in execution order.
    pub steps: Vec<StepReport>,
    /// Why the walk stopped.
    pub termination: Termination,
}

/// Walks 6-adic chains, gating every iterate on a primality oracle.
#[derive(Debug, Clone)]
pub struct ChainVerifier<O> {
    oracle: O,
}

impl<O: PrimalityOracle> ChainVerifier<O> {
    /// Creates a verifier backed by the given oracle.
    pub fn new(oracle: O) -> Self {
        ChainVerifier { oracle }
    }

    /// Walks the recurrence from `n0` for at most `max_steps` steps.
    ///
    /// Rejects `n0 = 0`; the recurrence is defined on positive integers.
    /// Every other termination is a normal outcome, reported in the
    /// returned [`Verification`].
    pub fn verify(&self, n0: &BigUint, max_steps: usize) -> HexadResult<Verification> {
        if n0.is_zero() {
            return Err(HexadError::ZeroStart);
        }

        let mut curr = n0.clone();
        let mut chain = Vec::new();
        let mut steps = Vec::new();
        let mut termination = Termination::MaxSteps;

        for index in 1..=max_steps {
            if !self.oracle.is_prime(&curr) {
                debug!(step = index, value = %curr, "composite, chain broken");
                steps.push(StepReport {
                    index,
                    value: curr.clone(),
                    prime: false,
                    applied: None,
                });
                termination = Termination::Composite(curr);
                break;
            }

            chain.push(curr.clone());

            match step(&curr) {
                Some((next, k)) => {
                    debug!(step = index, value = %curr, %k, %next, "prime, advancing");
                    steps.push(StepReport {
                        index,
                        value: curr,
                        prime: true,
                        applied: Some((k, next.clone())),
                    });
                    curr = next;
                }
                None => {
                    let rem = residue_mod_12(&curr);
                    debug!(step = index, value = %curr, rem, "prime, terminal residue");
                    steps.push(StepReport {
                        index,
                        value: curr,
                        prime: true,
                        applied: None,
                    });
                    termination = Termination::InvalidResidue(rem);
                    break;
                }
            }
        }

        Ok(Verification {
            chain: Chain(chain),
            steps,
            termination,
        })
    }
}
