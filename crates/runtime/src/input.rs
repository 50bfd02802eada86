//! Per-player input pipeline: landmarks to gestures to entries.

use gesture::{
    EntryComposer, FeatureConfig, FingerState, GestureCode, GestureQueue, GestureRule,
    LandmarkCoordinate, RuleTable, try_extract,
};

use duel_core::ActionEntry;

/// Result of running one frame through a player's pipeline.
pub(crate) struct Recognition {
    pub gesture: Option<GestureCode>,
    pub fresh: bool,
    pub entry: Option<ActionEntry>,
}

/// One player's gesture history and pending action.
#[derive(Clone, Debug)]
pub(crate) struct PlayerInput {
    queue: GestureQueue,
    composer: EntryComposer,
}

impl PlayerInput {
    pub fn new(features: &FeatureConfig) -> Self {
        Self {
            queue: GestureQueue::new(),
            composer: EntryComposer::new(features),
        }
    }

    pub fn queue(&self) -> &GestureQueue {
        &self.queue
    }

    /// Runs one frame. `None` when the landmarks are unusable.
    pub fn recognise(
        &mut self,
        landmarks: &[LandmarkCoordinate],
        features: &FeatureConfig,
        rules: &RuleTable,
    ) -> Option<Recognition> {
        let state: FingerState = match try_extract(landmarks, features) {
            Ok(state) => state,
            Err(error) => {
                tracing::warn!(%error, "dropping frame with malformed landmarks");
                return None;
            }
        };

        let gesture = rules.classify(&state).and_then(GestureRule::code);
        let (fresh, entry) = self.composer.observe(gesture, &state);

        if fresh && let Some(code) = gesture {
            self.queue.push(code);
        }

        Some(Recognition {
            gesture,
            fresh,
            entry,
        })
    }

    /// Drops a half-made entry when the player's turn ends.
    pub fn end_turn(&mut self) {
        if let Some(action) = self.composer.armed() {
            tracing::debug!(%action, "discarding armed action at end of turn");
        }
        self.composer.reset();
    }
}
