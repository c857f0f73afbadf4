//! Error types for chain verification

use thiserror::Error;

/// Chain verification errors.
///
/// Domain-level terminations (a composite iterate, a residue outside the
/// defined classes) are normal outcomes and never surface here; the only
/// errors are rejected inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexadError {
    /// The starting value was zero. The recurrence is defined on positive
    /// integers only.
    #[error("starting value must be positive")]
    ZeroStart,
}

/// Result type for chain operations
pub type HexadResult<T> = Result<T, HexadError>;
