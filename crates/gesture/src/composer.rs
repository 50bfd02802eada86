//! Turns a per-frame gesture stream into action entries.
//!
//! An action gesture (`D` or `P`) arms the composer; the next element gesture
//! completes an [`ActionEntry`]. Direction and angle come from the hand lean
//! in the frame that completes the entry. A gesture held over consecutive
//! frames counts once.

use duel_core::{ActionCode, ActionEntry, Direction, Element};

use crate::features::{FeatureConfig, FingerState};
use crate::rule::GestureCode;

#[derive(Clone, Debug, PartialEq)]
pub struct EntryComposer {
    straight_lean_threshold: f32,
    armed: Option<ActionCode>,
    last: Option<GestureCode>,
}

impl EntryComposer {
    pub fn new(config: &FeatureConfig) -> Self {
        Self {
            straight_lean_threshold: config.straight_lean_threshold,
            armed: None,
            last: None,
        }
    }

    /// The action waiting for an element, if any.
    pub fn armed(&self) -> Option<ActionCode> {
        self.armed
    }

    /// Feeds one frame's gesture.
    ///
    /// Returns `true` in the first field when the gesture is new (not held from
    /// the previous frame), and the completed entry in the second.
    pub fn observe(
        &mut self,
        code: Option<GestureCode>,
        features: &FingerState,
    ) -> (bool, Option<ActionEntry>) {
        if code == self.last {
            return (false, None);
        }
        self.last = code;

        let Some(code) = code else {
            return (false, None);
        };

        if let Some(action) = code.action() {
            if self.armed.replace(action).is_some() {
                tracing::debug!(%code, "action gesture re-armed before an element");
            }
            return (true, None);
        }

        let entry = match (self.armed.take(), code.element()) {
            (Some(action), Some(element)) => self.compose(action, element, features.hand_lean),
            _ => {
                tracing::debug!(%code, "element gesture without an armed action");
                None
            }
        };
        (true, entry)
    }

    /// Forgets any armed action and the held gesture.
    pub fn reset(&mut self) {
        self.armed = None;
        self.last = None;
    }

    /// Maps a signed lean to a direction and a two-digit angle.
    pub fn direction_and_angle(&self, lean: f32) -> (Direction, u8) {
        let magnitude = lean.abs();
        let direction = if magnitude < self.straight_lean_threshold {
            Direction::Straight
        } else if lean > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        };
        (direction, magnitude.round().min(99.0) as u8)
    }

    fn compose(&self, action: ActionCode, element: Element, lean: f32) -> Option<ActionEntry> {
        let (direction, angle) = self.direction_and_angle(lean);
        match action {
            ActionCode::Attack => Some(ActionEntry::attack(element, direction, angle)),
            ActionCode::Defend => Some(ActionEntry::defend(element, direction, angle)),
            ActionCode::None => None,
        }
    }
}

impl Default for EntryComposer {
    fn default() -> Self {
        Self::new(&FeatureConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaning(lean: f32) -> FingerState {
        FingerState {
            hand_lean: lean,
            ..FingerState::default()
        }
    }

    fn composer() -> EntryComposer {
        EntryComposer::new(&FeatureConfig::default())
    }

    #[test]
    fn action_then_element_makes_an_entry() {
        let mut composer = composer();

        assert_eq!(composer.observe(Some(GestureCode::Attack), &leaning(0.0)), (true, None));
        assert_eq!(composer.armed(), Some(ActionCode::Attack));

        let (_, entry) = composer.observe(Some(GestureCode::Fire), &leaning(45.2));
        let entry = entry.unwrap();
        assert_eq!(entry.to_string(), "PF+45");
        assert_eq!(composer.armed(), None);
    }

    #[test]
    fn held_gestures_count_once() {
        let mut composer = composer();
        let frame = leaning(0.0);

        assert!(composer.observe(Some(GestureCode::Defend), &frame).0);
        assert!(!composer.observe(Some(GestureCode::Defend), &frame).0);

        let (fresh, entry) = composer.observe(Some(GestureCode::Water), &leaning(-30.0));
        assert!(fresh);
        assert_eq!(entry.map(|e| e.to_string()).as_deref(), Some("DW-30"));

        // Holding the element does not produce a second entry.
        assert_eq!(composer.observe(Some(GestureCode::Water), &frame), (false, None));
    }

    #[test]
    fn element_without_action_is_ignored() {
        let mut composer = composer();
        assert_eq!(composer.observe(Some(GestureCode::Grass), &leaning(0.0)), (true, None));
        assert_eq!(composer.armed(), None);
    }

    #[test]
    fn releasing_a_gesture_allows_repeating_it() {
        let mut composer = composer();
        let frame = leaning(0.0);

        composer.observe(Some(GestureCode::Attack), &frame);
        composer.observe(None, &frame);
        assert!(composer.observe(Some(GestureCode::Attack), &frame).0);
        assert_eq!(composer.armed(), Some(ActionCode::Attack));
    }

    #[test]
    fn lean_maps_to_direction() {
        let composer = composer();

        assert_eq!(composer.direction_and_angle(12.4), (Direction::Straight, 12));
        assert_eq!(composer.direction_and_angle(-19.9), (Direction::Straight, 20));
        assert_eq!(composer.direction_and_angle(-20.0), (Direction::Left, 20));
        assert_eq!(composer.direction_and_angle(130.0), (Direction::Right, 99));
    }
}
