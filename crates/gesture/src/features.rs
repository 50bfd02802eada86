//! Geometric features of one hand.
//!
//! All features are computed in 2-D image space (x right, y down). Angles are
//! in degrees. Extraction is a pure function of one landmark set.

use nalgebra::Vector2;

use crate::error::MalformedInput;
use crate::landmarks::{self as lm, LANDMARK_COUNT, LandmarkCoordinate};

/// Thresholds used by the extractor and the entry composer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FeatureConfig {
    /// Maximum deviation from 180° for a joint to count as straight.
    pub straight_angle_threshold: f32,
    /// How far above its knuckle a fingertip must be to point up.
    pub up_tolerance_y: f32,
    /// Hand lean below which an entry is recorded as straight.
    pub straight_lean_threshold: f32,
}

impl FeatureConfig {
    pub const DEFAULT_STRAIGHT_ANGLE_THRESHOLD: f32 = 30.0;
    pub const DEFAULT_UP_TOLERANCE_Y: f32 = 0.05;
    pub const DEFAULT_STRAIGHT_LEAN_THRESHOLD: f32 = 20.0;
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            straight_angle_threshold: Self::DEFAULT_STRAIGHT_ANGLE_THRESHOLD,
            up_tolerance_y: Self::DEFAULT_UP_TOLERANCE_Y,
            straight_lean_threshold: Self::DEFAULT_STRAIGHT_LEAN_THRESHOLD,
        }
    }
}

/// The four non-thumb fingers.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// Landmark indices `[mcp, pip, dip, tip]`.
    pub const fn joints(self) -> [usize; 4] {
        match self {
            Self::Index => [lm::INDEX_MCP, lm::INDEX_PIP, lm::INDEX_DIP, lm::INDEX_TIP],
            Self::Middle => [lm::MIDDLE_MCP, lm::MIDDLE_PIP, lm::MIDDLE_DIP, lm::MIDDLE_TIP],
            Self::Ring => [lm::RING_MCP, lm::RING_PIP, lm::RING_DIP, lm::RING_TIP],
            Self::Pinky => [lm::PINKY_MCP, lm::PINKY_PIP, lm::PINKY_DIP, lm::PINKY_TIP],
        }
    }
}

/// Features of a single finger.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FingerFeatures {
    pub stretched: bool,
    pub up: bool,
    /// Angle between wrist→fingertip and wrist→thumb tip.
    pub angle_to_thumb: f32,
}

/// Features of one hand in one frame.
///
/// The default value (nothing stretched, every angle zero) is what malformed
/// input degrades to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FingerState {
    pub index: FingerFeatures,
    pub middle: FingerFeatures,
    pub ring: FingerFeatures,
    pub pinky: FingerFeatures,
    /// Mean angle between each wrist→fingertip vector and image "up".
    pub hand_angle_to_y_axis: f32,
    /// Signed lean of the whole hand, positive toward +x.
    pub hand_lean: f32,
}

impl FingerState {
    pub fn finger(&self, finger: Finger) -> &FingerFeatures {
        match finger {
            Finger::Index => &self.index,
            Finger::Middle => &self.middle,
            Finger::Ring => &self.ring,
            Finger::Pinky => &self.pinky,
        }
    }

    fn finger_mut(&mut self, finger: Finger) -> &mut FingerFeatures {
        match finger {
            Finger::Index => &mut self.index,
            Finger::Middle => &mut self.middle,
            Finger::Ring => &mut self.ring,
            Finger::Pinky => &mut self.pinky,
        }
    }
}

/// Image-space "up".
fn up_axis() -> Vector2<f32> {
    Vector2::new(0.0, -1.0)
}

/// Interior angle between two vectors, `0` if either has zero length.
pub fn angle_between(a: &Vector2<f32>, b: &Vector2<f32>) -> f32 {
    let norms = a.norm() * b.norm();
    if norms == 0.0 {
        return 0.0;
    }
    (a.dot(b) / norms).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Angle at `b` formed by `a-b-c`.
pub fn joint_angle(a: &LandmarkCoordinate, b: &LandmarkCoordinate, c: &LandmarkCoordinate) -> f32 {
    angle_between(&(a.xy() - b.xy()), &(c.xy() - b.xy()))
}

/// Extracts features, or explains why the landmarks are unusable.
pub fn try_extract(
    landmarks: &[LandmarkCoordinate],
    config: &FeatureConfig,
) -> Result<FingerState, MalformedInput> {
    if landmarks.len() < LANDMARK_COUNT {
        return Err(MalformedInput::TooFewLandmarks {
            expected: LANDMARK_COUNT,
            actual: landmarks.len(),
        });
    }
    if let Some(index) = landmarks[..LANDMARK_COUNT]
        .iter()
        .position(|point| !point.is_finite())
    {
        return Err(MalformedInput::NonFinite { index });
    }

    let wrist = landmarks[lm::WRIST].xy();
    let thumb = landmarks[lm::THUMB_TIP].xy() - wrist;

    let mut state = FingerState::default();
    let mut angle_sum = 0.0;
    let mut reach_sum = Vector2::zeros();

    for finger in Finger::ALL {
        let [mcp, pip, dip, tip] = finger.joints().map(|index| landmarks[index]);
        let reach = tip.xy() - wrist;

        let straight = |angle: f32| (180.0 - angle).abs() < config.straight_angle_threshold;

        *state.finger_mut(finger) = FingerFeatures {
            stretched: straight(joint_angle(&mcp, &pip, &dip))
                && straight(joint_angle(&pip, &dip, &tip)),
            up: tip.y < mcp.y - config.up_tolerance_y,
            angle_to_thumb: angle_between(&thumb, &reach),
        };

        angle_sum += angle_between(&reach, &up_axis());
        reach_sum += reach;
    }

    state.hand_angle_to_y_axis = angle_sum / Finger::ALL.len() as f32;
    state.hand_lean = if reach_sum.norm() == 0.0 {
        0.0
    } else {
        reach_sum.x.atan2(-reach_sum.y).to_degrees()
    };

    Ok(state)
}

/// Extracts features, degrading to the default state on malformed input.
pub fn extract(landmarks: &[LandmarkCoordinate], config: &FeatureConfig) -> FingerState {
    match try_extract(landmarks, config) {
        Ok(state) => state,
        Err(error) => {
            tracing::warn!(%error, "ignoring malformed hand landmarks");
            FingerState::default()
        }
    }
}
