//! Bounded per-player buffer of committed action entries.

use arrayvec::ArrayVec;

use crate::config::DuelConfig;
use crate::state::SequenceError;

use super::entry::ActionEntry;

/// Ordered FIFO of a player's action entries.
///
/// The buffer never holds more than its configured capacity; pushing into a
/// full buffer evicts the oldest entry. Round `i` reads entry `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionSequence {
    entries: ArrayVec<ActionEntry, { DuelConfig::MAX_ACTIONS_CAP }>,
    capacity: usize,
}

impl ActionSequence {
    /// Creates an empty sequence holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Result<Self, SequenceError> {
        if capacity == 0 || capacity > DuelConfig::MAX_ACTIONS_CAP {
            return Err(SequenceError::InvalidCapacity {
                requested: capacity,
                max: DuelConfig::MAX_ACTIONS_CAP,
            });
        }

        Ok(Self {
            entries: ArrayVec::new(),
            capacity,
        })
    }

    /// Creates a sequence from recorded entries, keeping the newest `capacity`.
    pub fn from_entries(
        capacity: usize,
        entries: impl IntoIterator<Item = ActionEntry>,
    ) -> Result<Self, SequenceError> {
        let mut sequence = Self::with_capacity(capacity)?;
        for entry in entries {
            sequence.push(entry);
        }
        Ok(sequence)
    }

    /// Appends an entry, returning the evicted oldest entry when full.
    pub fn push(&mut self, entry: ActionEntry) -> Option<ActionEntry> {
        let evicted = if self.entries.len() == self.capacity {
            Some(self.entries.remove(0))
        } else {
            None
        };
        self.entries.push(entry);
        evicted
    }

    /// Entry committed for `round`, if the player recorded one.
    pub fn get(&self, round: usize) -> Option<&ActionEntry> {
        self.entries.get(round)
    }

    /// Entry for `round`, substituting the neutral entry past the end.
    pub fn entry_or_neutral(&self, round: usize) -> ActionEntry {
        self.get(round).copied().unwrap_or_else(ActionEntry::neutral)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Direction, Element};

    fn attack(angle: u8) -> ActionEntry {
        ActionEntry::attack(Element::Fire, Direction::Right, angle)
    }

    #[test]
    fn push_evicts_oldest_when_full() {
        let mut sequence = ActionSequence::with_capacity(3).unwrap();
        assert_eq!(sequence.push(attack(1)), None);
        assert_eq!(sequence.push(attack(2)), None);
        assert_eq!(sequence.push(attack(3)), None);
        assert!(sequence.is_full());

        assert_eq!(sequence.push(attack(4)), Some(attack(1)));
        assert_eq!(sequence.len(), 3);
        let angles: Vec<u8> = sequence.iter().map(ActionEntry::angle).collect();
        assert_eq!(angles, vec![2, 3, 4]);
    }

    #[test]
    fn missing_rounds_read_as_neutral() {
        let sequence = ActionSequence::from_entries(5, [attack(10)]).unwrap();
        assert_eq!(sequence.entry_or_neutral(0), attack(10));
        assert_eq!(sequence.entry_or_neutral(1), ActionEntry::neutral());
        assert_eq!(sequence.entry_or_neutral(99), ActionEntry::neutral());
    }

    #[test]
    fn capacity_is_validated() {
        assert!(matches!(
            ActionSequence::with_capacity(0),
            Err(SequenceError::InvalidCapacity { requested: 0, .. })
        ));
        assert!(ActionSequence::with_capacity(DuelConfig::MAX_ACTIONS_CAP).is_ok());
        assert!(ActionSequence::with_capacity(DuelConfig::MAX_ACTIONS_CAP + 1).is_err());
    }

    #[test]
    fn from_entries_keeps_newest() {
        let sequence = ActionSequence::from_entries(2, (1..=4).map(attack)).unwrap();
        let angles: Vec<u8> = sequence.iter().map(ActionEntry::angle).collect();
        assert_eq!(angles, vec![3, 4]);
    }
}
