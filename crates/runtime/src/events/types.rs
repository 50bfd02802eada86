//! Event types for different topics.

use duel_core::{ActionEntry, Side};
use gesture::GestureCode;
use serde::{Deserialize, Serialize};

/// The turn passed to another player.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnEvent {
    pub side: Side,
    /// Turns started since the session began; the first turn is 0.
    pub turn: u64,
    /// Session clock when the turn started, in seconds.
    pub at: f64,
}

/// Gesture recognition and entry composition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    Recognised {
        side: Side,
        code: GestureCode,
        /// Recent gesture symbols, oldest first.
        recent: String,
    },
    EntryRecorded {
        side: Side,
        entry: ActionEntry,
        evicted: Option<ActionEntry>,
    },
}

/// Match resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    Resolved {
        winner: Option<Side>,
        p1_health: f32,
        p2_health: f32,
    },
}
