//! Error kinds for the sharing core

use thiserror::Error;

/// Errors produced by field arithmetic, interpolation and [`Session`](crate::Session)
///
/// Every operation in the core is a pure, terminating computation, so none of
/// these are transient: retrying with the same input yields the same error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareError {
    #[error("Invalid threshold {0}: must be between 1 and 255")]
    InvalidThreshold(usize),

    #[error("Invalid share index {0}: must be between 1 and 254")]
    InvalidShareIndex(u8),

    #[error("Session has no coefficients: supply a secret or recover one first")]
    NotInitialized,

    #[error("Session already holds a secret; use is_valid to check further shares")]
    AlreadyDecoded,

    #[error("Insufficient shares: need at least {threshold}, but only {unique} unique provided")]
    InsufficientShares { threshold: u8, unique: usize },

    #[error("Shares have different lengths: expected {expected} bytes, got {actual}")]
    MalformedShares { expected: usize, actual: usize },

    #[error("Share length {actual} does not match secret length {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Shares do not match: redundant shares leave higher-order residue, cannot decode")]
    InconsistentShares,

    /// Inversion of zero. Upstream validation makes this unreachable from the
    /// public session API; seeing it means an internal logic defect.
    #[error("Division by zero in GF(256)")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, ShareError>;
