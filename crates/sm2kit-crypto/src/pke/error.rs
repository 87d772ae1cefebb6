//! Error types for SM2 encryption operations

use thiserror::Error;

/// Errors from SM2 public-key encryption operations
#[derive(Debug, Error)]
pub enum Sm2Error {
    /// Malformed input: bad hex, wrong envelope length, oversized integer
    #[error("malformed input: {reason}")]
    Format {
        /// What was wrong with the input
        reason: String,
    },

    /// Curve service failure: point not on curve, decode failure,
    /// scalar out of range
    #[error("curve operation failed: {reason}")]
    Curve {
        /// What the curve service rejected
        reason: String,
    },

    /// Cipher session method called out of order.
    /// This is a programming error by the caller, not a runtime condition.
    #[error("invalid session state: {operation} called while {state}")]
    State {
        /// The operation that was attempted
        operation: &'static str,
        /// The state the session was in
        state: &'static str,
    },

    /// Secure random source unavailable. Fatal; never retried.
    #[error("secure random source unavailable")]
    Randomness,

    /// Recomputed C3 tag does not match the tag carried in the envelope
    #[error("integrity check failed: recomputed tag does not match envelope tag")]
    IntegrityMismatch,
}

impl Sm2Error {
    /// Returns true if this error signals a precondition violation
    /// (a bug in the caller) rather than bad input data.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::State { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_error_is_precondition_violation() {
        let err = Sm2Error::State { operation: "transform", state: "Finalized" };
        assert!(err.is_precondition_violation());
    }

    #[test]
    fn data_errors_are_not_precondition_violations() {
        let err = Sm2Error::Format { reason: "odd number of hex characters".to_string() };
        assert!(!err.is_precondition_violation());

        let err = Sm2Error::IntegrityMismatch;
        assert!(!err.is_precondition_violation());
    }

    #[test]
    fn error_display() {
        let err = Sm2Error::State { operation: "finalize", state: "Finalized" };
        assert_eq!(err.to_string(), "invalid session state: finalize called while Finalized");
    }
}
