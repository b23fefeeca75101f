//! Error types for crypto-layer operations

use thiserror::Error;

/// Errors from crypto-layer operations.
///
/// Detailed diagnostics go to the log at the point of failure; the error
/// value itself carries only a terse reason. Degraded operation (strong
/// entropy source unavailable, weak fallback used) is deliberately NOT an
/// error: the operation still completes, and the degradation is surfaced
/// through tracing instead.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Caller-supplied input was malformed: empty or zero DH prime,
    /// generator, or peer key; key agreement before key generation;
    /// undecodable base-64 input.
    #[error("invalid parameters: {reason}")]
    InvalidParameters {
        /// What was wrong with the input
        reason: &'static str,
    },

    /// An underlying cryptographic primitive reported an error.
    /// Not distinguished further to the caller; the call site logs context.
    #[error("crypto primitive failure: {reason}")]
    PrimitiveFailure {
        /// Which primitive failed
        reason: &'static str,
    },
}
