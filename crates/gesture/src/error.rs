//! Gesture pipeline errors.

use duel_core::{DuelError, ErrorSeverity};

/// A landmark set that cannot be turned into features.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MalformedInput {
    #[error("expected {expected} hand landmarks, got {actual}")]
    TooFewLandmarks { expected: usize, actual: usize },

    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

impl DuelError for MalformedInput {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooFewLandmarks { .. } => "GESTURE_TOO_FEW_LANDMARKS",
            Self::NonFinite { .. } => "GESTURE_NON_FINITE_LANDMARK",
        }
    }
}

/// A rule table that cannot be used for classification.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("rule table is empty")]
    EmptyTable,

    #[error("rule #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("rule name {name:?} is used more than once")]
    DuplicateName { name: String },

    #[error("rule {name:?} must yield exactly one action or one element")]
    AmbiguousCode { name: String },

    #[error("rule {name:?} uses an unsupported constraint on {field}")]
    InvalidConstraint { name: String, field: &'static str },
}

impl DuelError for RuleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Configuration
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTable => "RULE_EMPTY_TABLE",
            Self::EmptyName { .. } => "RULE_EMPTY_NAME",
            Self::DuplicateName { .. } => "RULE_DUPLICATE_NAME",
            Self::AmbiguousCode { .. } => "RULE_AMBIGUOUS_CODE",
            Self::InvalidConstraint { .. } => "RULE_INVALID_CONSTRAINT",
        }
    }
}
