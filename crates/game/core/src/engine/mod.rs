//! Match execution pipeline.
//!
//! The [`DuelEngine`] is the authoritative reducer for [`MatchState`]. Every
//! round flows through the same path: clear hit flags, resolve the matchup,
//! apply charge and damage, then place the round's clips on both tracks.

mod report;

pub use report::{MatchReport, RoundReport, SideReport};

use crate::combat::{CombatError, apply_round};
use crate::config::DuelConfig;
use crate::state::{MatchState, Side};
use crate::timeline::TimingScheduler;

/// Engine that plays the rounds of one match over borrowed state.
///
/// The engine never retains the state past its own lifetime; the caller
/// keeps ownership and can inspect it between rounds.
pub struct DuelEngine<'a> {
    state: &'a mut MatchState,
    config: &'a DuelConfig,
    scheduler: TimingScheduler,
}

impl<'a> DuelEngine<'a> {
    pub fn new(state: &'a mut MatchState, config: &'a DuelConfig) -> Self {
        Self {
            state,
            config,
            scheduler: TimingScheduler::new(config),
        }
    }

    /// Number of rounds a full match plays.
    pub fn round_count(&self) -> usize {
        self.config.max_actions
    }

    /// Plays one round and returns its report.
    ///
    /// Rounds beyond a player's recorded sequence use the neutral entry.
    pub fn play_round(&mut self, round: usize) -> Result<RoundReport, CombatError> {
        let MatchState { p1, p2 } = &mut *self.state;

        let p1_entry = p1.sequence.entry_or_neutral(round);
        let p2_entry = p2.sequence.entry_or_neutral(round);

        let applied = apply_round(p1, p2, round, self.config)?;

        let timing = self.scheduler.schedule_round(
            (&mut p1.track, &p1_entry, p1.is_hit),
            (&mut p2.track, &p2_entry, p2.is_hit),
        );

        let side_report = |side: Side| {
            let player = self.state.player(side);
            let outcome = applied.outcome.side(side);
            SideReport {
                entry: match side {
                    Side::P1 => p1_entry,
                    Side::P2 => p2_entry,
                },
                hit: outcome.hit,
                charge_gain: outcome.charge_gain,
                damage: applied.damage(side),
                health: player.health(),
                hit_charge: player.hit_charge,
                timing: *timing.side(side),
            }
        };

        Ok(RoundReport {
            round,
            p1: side_report(Side::P1),
            p2: side_report(Side::P2),
        })
    }

    /// Plays every round of the match in order.
    ///
    /// Stops at the first combat error; rounds already played stay applied.
    pub fn fight(&mut self) -> Result<MatchReport, CombatError> {
        let rounds = (0..self.round_count())
            .map(|round| self.play_round(round))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MatchReport::new(
            rounds,
            self.state.p1.health(),
            self.state.p2.health(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionEntry, Direction, Element};
    use crate::timeline::ClipKind;

    fn state_with(
        config: &DuelConfig,
        p1: Vec<ActionEntry>,
        p2: Vec<ActionEntry>,
    ) -> MatchState {
        let mut state = MatchState::new(config).unwrap();
        state.p1 = state.p1.clone().with_entries(p1).unwrap();
        state.p2 = state.p2.clone().with_entries(p2).unwrap();
        state
    }

    #[test]
    fn fight_plays_max_actions_rounds() {
        let config = DuelConfig::default();
        let mut state = state_with(
            &config,
            vec![ActionEntry::attack(Element::Fire, Direction::Right, 45)],
            vec![],
        );

        let report = DuelEngine::new(&mut state, &config).fight().unwrap();

        assert_eq!(report.rounds.len(), 5);
        assert!(report.rounds[0].p2.hit);
        assert!(report.rounds[1..].iter().all(|r| !r.p1.hit && !r.p2.hit));
        // |0 - 45| * 1.12 = 50 -> 1.5 damage
        assert_eq!(report.p2_health, 98.5);
        assert_eq!(report.winner, Some(Side::P1));
    }

    #[test]
    fn tracks_stay_in_step_across_rounds() {
        let config = DuelConfig::default();
        let mut state = state_with(
            &config,
            vec![ActionEntry::neutral(), ActionEntry::attack(Element::Water, Direction::Left, 10)],
            vec![ActionEntry::attack(Element::Grass, Direction::Left, 60)],
        );

        let report = DuelEngine::new(&mut state, &config).fight().unwrap();

        for round in &report.rounds {
            assert_eq!(round.p1.timing.start, round.p2.timing.start);
            assert_eq!(
                round.p1.timing.total_duration(),
                round.p2.timing.total_duration()
            );
        }
        assert_eq!(state.p1.track.cursor(), state.p2.track.cursor());
        // round 0: p1 hit (4.0), round 1: p2 idle hit (4.0), then three idle rounds
        assert_eq!(state.p1.track.cursor(), 14.0);
    }

    #[test]
    fn round_report_carries_clip_choice() {
        let config = DuelConfig::default();
        let mut state = state_with(
            &config,
            vec![ActionEntry::defend(Element::Grass, Direction::Left, 35)],
            vec![ActionEntry::attack(Element::Water, Direction::Right, 5)],
        );

        let round = DuelEngine::new(&mut state, &config).play_round(0).unwrap();

        assert_eq!(round.p1.timing.action.kind, ClipKind::Defend(Direction::Left));
        assert_eq!(round.p2.timing.action.kind, ClipKind::Attack(Direction::Straight));
        // grass defends against water: negated
        assert!(!round.p1.hit && !round.p2.hit);
    }

    #[test]
    fn element_less_attack_is_reported() {
        let config = DuelConfig::default();
        let mut bad = ActionEntry::neutral();
        bad.action = crate::action::ActionCode::Attack;
        let mut state = state_with(&config, vec![bad], vec![]);

        let err = DuelEngine::new(&mut state, &config).fight().unwrap_err();
        assert!(matches!(err, CombatError::MissingElement { side: Side::P1, round: 0, .. }));
    }
}
