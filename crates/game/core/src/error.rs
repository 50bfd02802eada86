//! Common error infrastructure for duel-core.
//!
//! Domain-specific errors (`EntryError`, `SequenceError`, `CombatError`) are
//! defined next to the code that raises them. This module provides the shared
//! severity classification they all report through [`DuelError`].

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Configuration**: Broken rule tables, corrupted sequences or config values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: malformed entry code, angle out of range
    Validation,

    /// Configuration error - the data driving the match is unusable.
    ///
    /// Examples: attack entry without an element, zero-capacity sequence
    Configuration,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Configuration => "configuration",
        }
    }

    /// Returns true if the caller must fix its data before continuing.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration)
    }
}

/// Common trait for all duel-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to act, not on impact
pub trait DuelError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
