//! Synthetic hand poses.
//!
//! Builds plausible landmark sets from a handful of parameters so that
//! fixtures and tests can replay gestures without a camera.

use nalgebra::{Rotation2, Vector2};

use crate::features::Finger;
use crate::landmarks::{self as lm, LANDMARK_COUNT, LandmarkCoordinate};
use crate::rule::GestureCode;

const WRIST_POSITION: [f32; 2] = [0.5, 0.9];
const PALM_LENGTH: f32 = 0.15;
const PHALANX_LENGTH: f32 = 0.04;
const CURLED_PHALANX_LENGTH: f32 = 0.03;
const KNUCKLE_OFFSETS: [f32; 4] = [-0.045, -0.015, 0.015, 0.045];
const THUMB_SEGMENTS: [f32; 4] = [0.05, 0.1, 0.14, 0.18];

/// A hand described by which fingers are extended and how it is tilted.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HandPose {
    /// Extended flags for index, middle, ring and pinky.
    pub extended: [bool; 4],
    /// Tilt of the hand from vertical in degrees, positive toward +x.
    pub lean: f32,
    /// Angle between the thumb and the hand axis in degrees.
    pub thumb_spread: f32,
}

impl Default for HandPose {
    fn default() -> Self {
        Self::fist()
    }
}

impl HandPose {
    pub const DEFAULT_THUMB_SPREAD: f32 = 10.0;

    pub const fn new(extended: [bool; 4]) -> Self {
        Self {
            extended,
            lean: 0.0,
            thumb_spread: Self::DEFAULT_THUMB_SPREAD,
        }
    }

    pub const fn open() -> Self {
        Self::new([true; 4])
    }

    pub const fn fist() -> Self {
        Self::new([false; 4])
    }

    /// An open hand with the thumb spread wide; no canonical rule matches it.
    pub const fn relaxed() -> Self {
        Self::open().thumb_spread(60.0)
    }

    /// The pose the canonical rule table recognises as `code`.
    pub const fn for_code(code: GestureCode) -> Self {
        match code {
            GestureCode::Defend => Self::new([false, true, false, false]),
            GestureCode::Attack => Self::new([true, false, false, true]),
            GestureCode::Fire => Self::new([true, true, false, false]),
            GestureCode::Grass => Self::open(),
            GestureCode::Water => Self::fist(),
        }
    }

    pub const fn leaning(mut self, lean: f32) -> Self {
        self.lean = lean;
        self
    }

    pub const fn thumb_spread(mut self, spread: f32) -> Self {
        self.thumb_spread = spread;
        self
    }

    pub fn landmarks(&self) -> [LandmarkCoordinate; LANDMARK_COUNT] {
        let mut points = [LandmarkCoordinate::default(); LANDMARK_COUNT];
        let wrist = Vector2::new(WRIST_POSITION[0], WRIST_POSITION[1]);
        let axis = rotate(&Vector2::new(0.0, -1.0), self.lean);
        let across = rotate(&axis, 90.0);

        let mut put = |index: usize, at: Vector2<f32>| {
            points[index] = LandmarkCoordinate::new(at.x, at.y, 0.0);
        };

        put(lm::WRIST, wrist);

        let thumb_axis = rotate(&axis, -self.thumb_spread);
        for (index, reach) in [lm::THUMB_CMC, lm::THUMB_MCP, lm::THUMB_IP, lm::THUMB_TIP]
            .into_iter()
            .zip(THUMB_SEGMENTS)
        {
            put(index, wrist + thumb_axis * reach);
        }

        for ((finger, extended), offset) in Finger::ALL
            .into_iter()
            .zip(self.extended)
            .zip(KNUCKLE_OFFSETS)
        {
            let [mcp, pip, dip, tip] = finger.joints();
            let knuckle = wrist + axis * PALM_LENGTH + across * offset;
            let middle = knuckle + axis * PHALANX_LENGTH;

            put(mcp, knuckle);
            put(pip, middle);
            if extended {
                put(dip, middle + axis * PHALANX_LENGTH);
                put(tip, middle + axis * (2.0 * PHALANX_LENGTH));
            } else {
                let folded = middle + rotate(&axis, 100.0) * CURLED_PHALANX_LENGTH;
                put(dip, folded);
                put(tip, folded + rotate(&axis, 200.0) * CURLED_PHALANX_LENGTH);
            }
        }

        points
    }
}

fn rotate(v: &Vector2<f32>, degrees: f32) -> Vector2<f32> {
    Rotation2::new(degrees.to_radians()) * v
}
