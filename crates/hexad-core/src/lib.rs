//! Hexad Core - 6-adic prime chain recurrence and verification
//!
//! A 6-adic prime chain starts from an integer n0 and repeatedly applies a
//! residue-routed linear map: depending on n mod 12, the next value is
//! (7n + k)/6 for k in {-1, -5, +5, +1}, with the four defined residue
//! classes {1, 5, 7, 11} chosen so the division is always exact. The chain
//! records consecutive iterates for as long as every value tests prime; it
//! breaks on the first composite value or on a residue outside the defined
//! classes.
//!
//! This crate provides:
//! - The step function (residue routing and exact division)
//! - A primality oracle trait with a deterministic Miller-Rabin impl
//! - The chain walker, which returns the verified chain and a per-step trace

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chain;
pub mod error;
pub mod primality;
pub mod step;

pub use chain::{Chain, ChainVerifier, StepReport, Termination, Verification};
pub use error::{HexadError, HexadResult};
pub use primality::{MillerRabin, PrimalityOracle};
pub use step::{residue_mod_12, step, StepConstant};
