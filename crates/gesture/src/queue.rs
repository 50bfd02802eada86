use arrayvec::ArrayVec;
use duel_core::DuelConfig;

use crate::rule::GestureCode;

const CAPACITY: usize = DuelConfig::GESTURE_QUEUE_CAPACITY;

/// The most recent gestures one player made, oldest first.
///
/// Full queues evict the oldest gesture on push.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureQueue {
    codes: ArrayVec<GestureCode, CAPACITY>,
}

impl GestureQueue {
    pub const CAPACITY: usize = CAPACITY;

    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `code`, returning the evicted oldest gesture if the queue was full.
    pub fn push(&mut self, code: GestureCode) -> Option<GestureCode> {
        let evicted = if self.codes.is_full() {
            Some(self.codes.remove(0))
        } else {
            None
        };
        self.codes.push(code);
        evicted
    }

    pub fn latest(&self) -> Option<GestureCode> {
        self.codes.last().copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = GestureCode> + '_ {
        self.codes.iter().copied()
    }

    /// Gesture symbols oldest first, e.g. `"PFDW"`.
    pub fn symbols(&self) -> String {
        self.iter().map(GestureCode::symbol).collect()
    }
}
