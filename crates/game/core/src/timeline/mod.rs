//! Presentation timeline reconciliation.
//!
//! Every player owns a [`Track`]: a cursor (cumulative presentation time) plus
//! the clips placed on it. The [`TimingScheduler`] places each round's clips
//! and pads the shorter track with an idle filler so both tracks start the
//! next round at the same time. Clip assets and playback belong to the
//! presentation layer; this module only decides kinds, starts and durations.

mod scheduler;
mod track;

pub use scheduler::{RoundTiming, TimingScheduler, TrackTiming, reconcile};
pub use track::{ClipKind, ClipPlacement, EffectPlacement, Track};
