//! Combat resolution errors.

use crate::action::ActionCode;
use crate::error::{DuelError, ErrorSeverity};
use crate::state::Side;

/// Errors surfaced while resolving a round.
///
/// Combat never fails on missing input (absent entries are neutral). It fails
/// only when an entry is internally inconsistent, which means the rule table
/// or the recorded sequence is broken.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error("{side} committed {action} in round {round} without an element")]
    MissingElement {
        side: Side,
        action: ActionCode,
        round: usize,
    },
}

impl DuelError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CombatError::MissingElement { .. } => ErrorSeverity::Configuration,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CombatError::MissingElement { .. } => "COMBAT_MISSING_ELEMENT",
        }
    }
}
