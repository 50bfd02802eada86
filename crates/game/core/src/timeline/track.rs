use crate::action::{Direction, Element};

/// Which animation a placed clip stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipKind {
    /// Base clip for a round without an action.
    Idle,
    Attack(Direction),
    Defend(Direction),
    /// Appended only for the side hit this round.
    HitReaction,
    /// Pads the shorter track up to the longer one.
    Filler,
}

/// A clip placed on a track.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipPlacement {
    pub kind: ClipKind,
    pub start: f64,
    pub duration: f64,
}

impl ClipPlacement {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// An element effect shown alongside an action clip.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectPlacement {
    pub element: Element,
    pub start: f64,
    pub duration: f64,
}

/// One player's presentation track.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    cursor: f64,
    clips: Vec<ClipPlacement>,
    effects: Vec<EffectPlacement>,
}

impl Track {
    /// Cumulative time of everything placed so far.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    pub fn clips(&self) -> &[ClipPlacement] {
        &self.clips
    }

    pub fn effects(&self) -> &[EffectPlacement] {
        &self.effects
    }

    /// Places a clip at the cursor and advances the cursor past it.
    pub fn place(&mut self, kind: ClipKind, duration: f64) -> ClipPlacement {
        let placement = ClipPlacement {
            kind,
            start: self.cursor,
            duration,
        };
        self.cursor += duration;
        self.clips.push(placement);
        placement
    }

    /// Records an element effect over an already placed clip.
    pub fn overlay(&mut self, element: Element, over: &ClipPlacement) {
        self.effects.push(EffectPlacement {
            element,
            start: over.start,
            duration: over.duration,
        });
    }
}
