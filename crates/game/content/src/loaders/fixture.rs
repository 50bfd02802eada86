//! Scripted match fixtures.
//!
//! A fixture gives each player pre-recorded entries and/or a list of hand
//! frames to replay through the gesture pipeline:
//!
//! ```toml
//! name = "sample"
//!
//! [p1]
//! entries = ["PF+45"]
//!
//! [[p1.frames]]
//! at = 0.5
//! gesture = "P"      # canonical pose for a gesture code
//!
//! [[p1.frames]]
//! at = 1.0
//! gesture = "F"
//! lean = 30.0        # tilt toward +x, in degrees
//!
//! [[p2.frames]]
//! at = 3.5
//! landmarks = [[0.5, 0.9, 0.0], ...]   # or 21 raw points
//! ```
//!
//! Frames without a gesture or landmarks replay a relaxed hand.

use std::path::Path;

use duel_core::{ActionEntry, Side};
use gesture::{GestureCode, HandPose, LANDMARK_COUNT, LandmarkCoordinate};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One replayed camera frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureFrame {
    /// Seconds since the start of the session.
    pub at: f64,
    #[serde(default)]
    pub gesture: Option<char>,
    #[serde(default)]
    pub lean: f32,
    #[serde(default)]
    pub landmarks: Option<Vec<[f32; 3]>>,
}

impl FixtureFrame {
    /// The landmark set this frame replays.
    pub fn hand(&self) -> LoadResult<Vec<LandmarkCoordinate>> {
        if let Some(points) = &self.landmarks {
            return Ok(points.iter().copied().map(LandmarkCoordinate::from).collect());
        }

        let pose = match self.gesture {
            Some(symbol) => GestureCode::from_symbol(symbol)
                .map(HandPose::for_code)
                .ok_or_else(|| anyhow::anyhow!("Unknown gesture code {:?}", symbol))?,
            None => HandPose::relaxed(),
        };
        Ok(pose.leaning(self.lean).landmarks().to_vec())
    }
}

/// Everything one player does in a fixture.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerScript {
    /// Entries recorded before any frame is replayed.
    pub entries: Vec<ActionEntry>,
    /// Frames in ascending `at` order.
    pub frames: Vec<FixtureFrame>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchFixture {
    pub name: String,
    #[serde(default)]
    pub p1: PlayerScript,
    #[serde(default)]
    pub p2: PlayerScript,
}

impl MatchFixture {
    pub fn script(&self, side: Side) -> &PlayerScript {
        match side {
            Side::P1 => &self.p1,
            Side::P2 => &self.p2,
        }
    }

    /// Both players' frames merged by time; P1 first on ties.
    pub fn timeline(&self) -> Vec<(Side, &FixtureFrame)> {
        let mut frames: Vec<_> = Side::BOTH
            .into_iter()
            .flat_map(|side| self.script(side).frames.iter().map(move |frame| (side, frame)))
            .collect();
        frames.sort_by(|(_, a), (_, b)| a.at.total_cmp(&b.at));
        frames
    }

    fn validate(&self) -> LoadResult<()> {
        for side in Side::BOTH {
            let mut previous = 0.0;
            for (index, frame) in self.script(side).frames.iter().enumerate() {
                if !frame.at.is_finite() || frame.at < previous {
                    anyhow::bail!(
                        "{} frame {} at {}s is out of order (previous {}s)",
                        side,
                        index,
                        frame.at,
                        previous
                    );
                }
                previous = frame.at;

                let hand = frame.hand().map_err(|e| anyhow::anyhow!("{} frame {}: {}", side, index, e))?;
                if hand.len() != LANDMARK_COUNT {
                    anyhow::bail!(
                        "{} frame {} has {} landmarks, expected {}",
                        side,
                        index,
                        hand.len(),
                        LANDMARK_COUNT
                    );
                }
            }
        }
        Ok(())
    }
}

/// Loader for match fixtures from TOML files.
pub struct FixtureLoader;

impl FixtureLoader {
    pub fn load(path: &Path) -> LoadResult<MatchFixture> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid fixture {}: {}", path.display(), e))
    }

    /// Parse and validate a fixture from TOML text.
    pub fn parse(content: &str) -> LoadResult<MatchFixture> {
        let fixture: MatchFixture = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse fixture TOML: {}", e))?;
        fixture.validate()?;
        Ok(fixture)
    }
}
