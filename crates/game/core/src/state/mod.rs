//! Authoritative per-match player state.
//!
//! Each [`PlayerState`] is exclusively owned by the [`MatchState`]; the engine
//! borrows both for the duration of one round and never retains them.
mod error;
mod player;

pub use error::SequenceError;
pub use player::PlayerState;

use crate::config::DuelConfig;

/// Which of the two players a value belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    P1,
    P2,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::P1, Side::P2];

    pub const fn opponent(self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
}

/// Both players' state for one match.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub p1: PlayerState,
    pub p2: PlayerState,
}

impl MatchState {
    /// Creates fresh players sized and charged according to `config`.
    pub fn new(config: &DuelConfig) -> Result<Self, SequenceError> {
        Ok(Self {
            p1: PlayerState::new(config)?,
            p2: PlayerState::new(config)?,
        })
    }

    pub fn player(&self, side: Side) -> &PlayerState {
        match side {
            Side::P1 => &self.p1,
            Side::P2 => &self.p2,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut PlayerState {
        match side {
            Side::P1 => &mut self.p1,
            Side::P2 => &mut self.p2,
        }
    }
}
