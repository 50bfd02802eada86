use duel_core::ActionEntry;
use gesture::GestureCode;
use serde::{Deserialize, Serialize};

use super::{Result, RuntimeError};

/// What one submitted frame did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameOutcome {
    /// Gesture recognised in this frame, held or new.
    pub gesture: Option<GestureCode>,
    /// The gesture was not held from the previous frame.
    pub fresh: bool,
    /// Entry completed by this frame and stored for the player.
    pub entry: Option<ActionEntry>,
    /// Oldest entry dropped to make room, if the store was full.
    pub evicted: Option<ActionEntry>,
    /// The landmarks were unusable and the frame was ignored.
    pub malformed: bool,
}

impl FrameOutcome {
    pub(crate) fn malformed() -> Self {
        Self {
            malformed: true,
            ..Self::default()
        }
    }
}

/// Counts from replaying a fixture into a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaySummary {
    pub frames: usize,
    pub skipped: usize,
    pub gestures: usize,
    pub entries: usize,
}

impl ReplaySummary {
    /// Counts one replayed frame.
    ///
    /// Out-of-turn frames are counted as skipped; any other error is returned.
    pub fn tally(&mut self, frame: Result<FrameOutcome>) -> Result<()> {
        self.frames += 1;
        match frame {
            Ok(outcome) => {
                self.gestures += usize::from(outcome.fresh && outcome.gesture.is_some());
                self.entries += usize::from(outcome.entry.is_some());
            }
            Err(RuntimeError::OutOfTurn { side, active }) => {
                tracing::warn!(%side, %active, "skipping out-of-turn frame");
                self.skipped += 1;
            }
            Err(error) => return Err(error),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::Side;

    #[test]
    fn tally_skips_out_of_turn_frames() {
        let mut summary = ReplaySummary::default();

        summary
            .tally(Err(RuntimeError::OutOfTurn {
                side: Side::P2,
                active: Side::P1,
            }))
            .unwrap();
        summary
            .tally(Ok(FrameOutcome {
                gesture: Some(GestureCode::Fire),
                fresh: true,
                ..FrameOutcome::default()
            }))
            .unwrap();

        assert_eq!(summary.frames, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.gestures, 1);
        assert!(summary.tally(Err(RuntimeError::Finished)).is_err());
    }
}
