//! Per-round and per-match reports.

use crate::action::ActionEntry;
use crate::state::Side;
use crate::timeline::TrackTiming;

/// What one round did to one player.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideReport {
    pub entry: ActionEntry,
    pub hit: bool,
    pub charge_gain: u32,
    pub damage: f32,
    /// Health after the round.
    pub health: f32,
    /// Charge after the round.
    pub hit_charge: u32,
    pub timing: TrackTiming,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    pub round: usize,
    pub p1: SideReport,
    pub p2: SideReport,
}

impl RoundReport {
    pub fn side(&self, side: Side) -> &SideReport {
        match side {
            Side::P1 => &self.p1,
            Side::P2 => &self.p2,
        }
    }
}

/// Full outcome of a match.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport {
    pub rounds: Vec<RoundReport>,
    pub p1_health: f32,
    pub p2_health: f32,
    /// Side with more health left, `None` on a tie.
    pub winner: Option<Side>,
}

impl MatchReport {
    pub fn new(rounds: Vec<RoundReport>, p1_health: f32, p2_health: f32) -> Self {
        let winner = if p1_health > p2_health {
            Some(Side::P1)
        } else if p2_health > p1_health {
            Some(Side::P2)
        } else {
            None
        };

        Self {
            rounds,
            p1_health,
            p2_health,
            winner,
        }
    }

    /// SHA-256 commitment to the whole report.
    ///
    /// Rounds are hashed in order using their bincode encoding, followed by
    /// the final health values, so identical matches always share a digest.
    #[cfg(feature = "serde")]
    pub fn digest(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        for round in &self.rounds {
            if let Ok(bytes) = bincode::serialize(round) {
                hasher.update(&bytes);
            }
        }
        hasher.update(self.p1_health.to_le_bytes());
        hasher.update(self.p2_health.to_le_bytes());

        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_follows_remaining_health() {
        assert_eq!(MatchReport::new(vec![], 90.0, 80.0).winner, Some(Side::P1));
        assert_eq!(MatchReport::new(vec![], 10.0, 80.0).winner, Some(Side::P2));
        assert_eq!(MatchReport::new(vec![], 50.0, 50.0).winner, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn digest_tracks_content() {
        let a = MatchReport::new(vec![], 100.0, 98.5);
        let b = MatchReport::new(vec![], 100.0, 98.0);

        assert_eq!(a.digest(), a.clone().digest());
        assert_ne!(hex::encode(a.digest()), hex::encode(b.digest()));
    }
}
