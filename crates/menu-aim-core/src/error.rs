#![forbid(unsafe_code)]

//! Error model.
//!
//! The algorithm itself has no recoverable error conditions: it is pure
//! geometry and state transition over already-measured inputs, and a
//! degenerate gradient resolves arithmetically (see
//! [`trajectory`](crate::trajectory)), never as an error. The only failure
//! class is precondition violation by the adapter, and those fail fast
//! rather than corrupting state.

use thiserror::Error;

/// Adapter precondition violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AimError {
    /// An operation was invoked after `teardown()`.
    #[error("controller has been torn down")]
    TornDown,

    /// An activation was requested for a candidate that was never
    /// registered with `track`.
    #[error("candidate is not tracked by this controller")]
    UnknownCandidate,
}

/// Standard result type for menu-aim APIs.
pub type Result<T> = std::result::Result<T, AimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            format!("{}", AimError::TornDown),
            "controller has been torn down"
        );
        assert_eq!(
            format!("{}", AimError::UnknownCandidate),
            "candidate is not tracked by this controller"
        );
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(AimError::TornDown, AimError::TornDown);
        assert_ne!(AimError::TornDown, AimError::UnknownCandidate);
    }

    #[test]
    fn question_mark_propagation() {
        fn fails() -> Result<()> {
            Err(AimError::TornDown)?;
            Ok(())
        }
        assert_eq!(fails(), Err(AimError::TornDown));
    }
}
