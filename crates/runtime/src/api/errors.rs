//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the duel core and from session bookkeeping so clients
//! can bubble them up with consistent context.
use duel_core::{CombatError, DuelError, ErrorSeverity, SequenceError, Side};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{side} submitted a frame during {active}'s turn")]
    OutOfTurn { side: Side, active: Side },

    #[error("turn duration must be a positive number of seconds, got {seconds}")]
    InvalidTurnDuration { seconds: f64 },

    #[error("elapsed time must be finite and non-negative, got {seconds}")]
    InvalidElapsed { seconds: f64 },

    #[error("match already resolved")]
    Finished,

    #[error("fixture frame at {at}s is unusable: {reason}")]
    Fixture { at: f64, reason: String },

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error(transparent)]
    Combat(#[from] CombatError),
}

impl DuelError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfTurn { .. } | Self::InvalidElapsed { .. } | Self::Finished => {
                ErrorSeverity::Validation
            }
            Self::InvalidTurnDuration { .. } | Self::Fixture { .. } => ErrorSeverity::Configuration,
            Self::Sequence(error) => error.severity(),
            Self::Combat(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfTurn { .. } => "RUNTIME_OUT_OF_TURN",
            Self::InvalidTurnDuration { .. } => "RUNTIME_INVALID_TURN_DURATION",
            Self::InvalidElapsed { .. } => "RUNTIME_INVALID_ELAPSED",
            Self::Finished => "RUNTIME_FINISHED",
            Self::Fixture { .. } => "RUNTIME_FIXTURE",
            Self::Sequence(error) => error.error_code(),
            Self::Combat(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_names_who_must_act() {
        let out_of_turn = RuntimeError::OutOfTurn {
            side: Side::P2,
            active: Side::P1,
        };
        assert_eq!(out_of_turn.severity().as_str(), "validation");
        assert_eq!(out_of_turn.error_code(), "RUNTIME_OUT_OF_TURN");

        let bad_duration = RuntimeError::InvalidTurnDuration { seconds: -1.0 };
        assert!(bad_duration.severity().is_configuration());
        assert_eq!(bad_duration.severity().as_str(), "configuration");
    }
}
