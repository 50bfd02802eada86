use crate::action::{ActionCode, ActionEntry, Direction};
use crate::config::DuelConfig;
use crate::state::Side;

use super::track::{ClipKind, ClipPlacement, Track};

/// Clips placed on one track during one round.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackTiming {
    /// Where the round started on this track.
    pub start: f64,
    pub action: ClipPlacement,
    pub hit_reaction: Option<ClipPlacement>,
    pub filler: Option<ClipPlacement>,
}

impl TrackTiming {
    /// Duration of the round's own clips (action plus hit reaction).
    pub fn clip_duration(&self) -> f64 {
        self.action.duration + self.hit_reaction.map_or(0.0, |clip| clip.duration)
    }

    /// Duration including the filler, equal on both tracks after reconciliation.
    pub fn total_duration(&self) -> f64 {
        self.clip_duration() + self.filler.map_or(0.0, |clip| clip.duration)
    }
}

/// Both tracks' timing for one round.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundTiming {
    pub p1: TrackTiming,
    pub p2: TrackTiming,
}

impl RoundTiming {
    pub fn side(&self, side: Side) -> &TrackTiming {
        match side {
            Side::P1 => &self.p1,
            Side::P2 => &self.p2,
        }
    }
}

/// Places round clips and keeps both players' tracks in step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingScheduler {
    action_clip_duration: f64,
    hit_clip_duration: f64,
    straight_angle_limit: u8,
}

impl TimingScheduler {
    pub fn new(config: &DuelConfig) -> Self {
        Self {
            action_clip_duration: config.action_clip_duration,
            hit_clip_duration: config.hit_clip_duration,
            straight_angle_limit: config.straight_angle_limit,
        }
    }

    /// Chooses the base clip for an entry.
    ///
    /// Shallow angles always use the straight variant, whatever the recorded
    /// direction.
    pub fn clip_for(&self, entry: &ActionEntry) -> ClipKind {
        let direction = if entry.angle() < self.straight_angle_limit {
            Direction::Straight
        } else {
            entry.direction
        };

        match entry.action {
            ActionCode::None => ClipKind::Idle,
            ActionCode::Attack => ClipKind::Attack(direction),
            ActionCode::Defend => ClipKind::Defend(direction),
        }
    }

    /// Places one round on both tracks and reconciles their cursors.
    ///
    /// Each track receives its base action clip, then a hit-reaction clip if
    /// that side was hit. The track that ends earlier is padded with a filler
    /// clip covering the gap, so both cursors are equal on return.
    pub fn schedule_round(
        &self,
        p1: (&mut Track, &ActionEntry, bool),
        p2: (&mut Track, &ActionEntry, bool),
    ) -> RoundTiming {
        let (p1_track, p1_entry, p1_hit) = p1;
        let (p2_track, p2_entry, p2_hit) = p2;

        let mut p1_timing = self.place_round(p1_track, p1_entry, p1_hit);
        let mut p2_timing = self.place_round(p2_track, p2_entry, p2_hit);

        match reconcile(p1_track, p2_track) {
            Some((Side::P1, filler)) => p1_timing.filler = Some(filler),
            Some((Side::P2, filler)) => p2_timing.filler = Some(filler),
            None => {}
        }

        RoundTiming {
            p1: p1_timing,
            p2: p2_timing,
        }
    }

    fn place_round(&self, track: &mut Track, entry: &ActionEntry, hit: bool) -> TrackTiming {
        let start = track.cursor();
        let action = track.place(self.clip_for(entry), self.action_clip_duration);

        if let Some(element) = entry.element.filter(|_| !entry.is_neutral()) {
            track.overlay(element, &action);
        }

        let hit_reaction = hit.then(|| track.place(ClipKind::HitReaction, self.hit_clip_duration));

        TrackTiming {
            start,
            action,
            hit_reaction,
            filler: None,
        }
    }
}

/// Pads whichever track is behind with a filler clip equal to the gap.
///
/// Returns the padded side and its filler, or `None` if the cursors already match.
pub fn reconcile(p1: &mut Track, p2: &mut Track) -> Option<(Side, ClipPlacement)> {
    let gap = p1.cursor() - p2.cursor();

    if gap > 0.0 {
        Some((Side::P2, p2.place(ClipKind::Filler, gap)))
    } else if gap < 0.0 {
        Some((Side::P1, p1.place(ClipKind::Filler, -gap)))
    } else {
        None
    }
}
