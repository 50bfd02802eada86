//! Player state errors.
//!
//! Errors related to building per-match player state and its capacity limits.

use crate::error::{DuelError, ErrorSeverity};

/// Errors that occur while building or filling player state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceError {
    /// Requested sequence capacity is zero or above the inline buffer size.
    #[error("Action sequence capacity {requested} is invalid (allowed: 1..={max})")]
    InvalidCapacity {
        /// Capacity that was asked for.
        requested: usize,
        /// Largest supported capacity.
        max: usize,
    },
}

impl DuelError for SequenceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SequenceError::InvalidCapacity { .. } => ErrorSeverity::Configuration,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SequenceError::InvalidCapacity { .. } => "SEQUENCE_INVALID_CAPACITY",
        }
    }
}
