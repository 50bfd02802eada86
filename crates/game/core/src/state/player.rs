use crate::action::{ActionEntry, ActionSequence};
use crate::config::DuelConfig;
use crate::timeline::Track;

use super::SequenceError;

/// One player's mutable match state.
///
/// `is_hit` is reset at the start of every round's resolution and set at most
/// once per round. `hit_charge` survives rounds until a hit consumes it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub sequence: ActionSequence,
    pub hit_charge: u32,
    pub is_hit: bool,
    health: f32,
    max_health: f32,
    pub track: Track,
}

impl PlayerState {
    pub fn new(config: &DuelConfig) -> Result<Self, SequenceError> {
        Ok(Self {
            sequence: ActionSequence::with_capacity(config.max_actions)?,
            hit_charge: config.initial_hit_charge,
            is_hit: false,
            health: config.max_health,
            max_health: config.max_health,
            track: Track::default(),
        })
    }

    /// Replaces the recorded sequence with `entries` (newest kept when too many).
    pub fn with_entries(
        mut self,
        entries: impl IntoIterator<Item = ActionEntry>,
    ) -> Result<Self, SequenceError> {
        self.sequence = ActionSequence::from_entries(self.sequence.capacity(), entries)?;
        Ok(self)
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }

    /// Reduces health by `damage`, clamped to `[0, max_health]`.
    pub fn take_damage(&mut self, damage: f32) {
        self.health = crate::combat::apply_damage(self.health, damage).min(self.max_health);
    }
}
