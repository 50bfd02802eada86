//! Stateful application of one resolved round to both players.

use crate::config::DuelConfig;
use crate::state::{PlayerState, Side};

use super::damage::calculate_damage;
use super::error::CombatError;
use super::hit::resolve_round;
use super::result::{RoundOutcome, SideOutcome};

/// Outcome of [`apply_round`]: who was hit and how much damage each side took.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppliedRound {
    pub outcome: RoundOutcome,
    pub p1_damage: f32,
    pub p2_damage: f32,
}

impl AppliedRound {
    pub fn damage(&self, side: Side) -> f32 {
        match side {
            Side::P1 => self.p1_damage,
            Side::P2 => self.p2_damage,
        }
    }
}

/// Resolves `round` for both players and applies hits, charge and damage.
///
/// Both `is_hit` flags are cleared first. A hit side takes damage scaled by
/// its own charge, then its charge resets to `config.charge_after_hit`.
/// On error neither player is modified beyond the cleared hit flags.
pub fn apply_round(
    p1: &mut PlayerState,
    p2: &mut PlayerState,
    round: usize,
    config: &DuelConfig,
) -> Result<AppliedRound, CombatError> {
    p1.is_hit = false;
    p2.is_hit = false;

    let p1_entry = p1.sequence.entry_or_neutral(round);
    let p2_entry = p2.sequence.entry_or_neutral(round);
    let outcome = resolve_round(round, Some(&p1_entry), Some(&p2_entry))?;

    let p1_damage = settle(p1, &outcome.p1, p1_entry.angle(), p2_entry.angle(), config);
    let p2_damage = settle(p2, &outcome.p2, p2_entry.angle(), p1_entry.angle(), config);

    Ok(AppliedRound {
        outcome,
        p1_damage,
        p2_damage,
    })
}

fn settle(
    player: &mut PlayerState,
    outcome: &SideOutcome,
    own_angle: u8,
    opponent_angle: u8,
    config: &DuelConfig,
) -> f32 {
    player.hit_charge = player.hit_charge.saturating_add(outcome.charge_gain);

    if !outcome.hit {
        return 0.0;
    }

    let damage = calculate_damage(own_angle, opponent_angle, player.hit_charge);
    player.take_damage(damage);
    player.hit_charge = config.charge_after_hit;
    player.is_hit = true;
    damage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionEntry, Direction, Element};

    fn players(p1: Vec<ActionEntry>, p2: Vec<ActionEntry>) -> (PlayerState, PlayerState) {
        let config = DuelConfig::default();
        (
            PlayerState::new(&config).unwrap().with_entries(p1).unwrap(),
            PlayerState::new(&config).unwrap().with_entries(p2).unwrap(),
        )
    }

    #[test]
    fn parry_charge_boosts_the_next_hit_taken() {
        let config = DuelConfig::default();
        let (mut p1, mut p2) = players(
            vec![
                ActionEntry::defend(Element::Fire, Direction::Straight, 0),
                ActionEntry::neutral(),
            ],
            vec![
                ActionEntry::attack(Element::Fire, Direction::Straight, 0),
                ActionEntry::attack(Element::Grass, Direction::Right, 50),
            ],
        );

        let first = apply_round(&mut p1, &mut p2, 0, &config).unwrap();
        assert_eq!(first.outcome.p1.charge_gain, 1);
        assert_eq!(p1.hit_charge, 2);
        assert!(!p1.is_hit && !p2.is_hit);

        let second = apply_round(&mut p1, &mut p2, 1, &config).unwrap();
        assert!(p1.is_hit);
        // |50 - 0| * 1.12 = 56 -> (1 + 0.56) * 2
        assert!((second.p1_damage - 3.12).abs() < 1e-6);
        assert_eq!(p1.hit_charge, config.charge_after_hit);
        assert!((p1.health() - 96.88).abs() < 1e-4);
    }

    #[test]
    fn hit_flags_reset_every_round() {
        let config = DuelConfig::default();
        let (mut p1, mut p2) = players(
            vec![ActionEntry::neutral()],
            vec![ActionEntry::attack(Element::Water, Direction::Left, 30)],
        );

        apply_round(&mut p1, &mut p2, 0, &config).unwrap();
        assert!(p1.is_hit);

        apply_round(&mut p1, &mut p2, 1, &config).unwrap();
        assert!(!p1.is_hit);
    }

    #[test]
    fn configured_post_hit_charge_is_used() {
        let config = DuelConfig::default().charge_after_hit(0);
        let (mut p1, mut p2) = players(
            vec![ActionEntry::neutral()],
            vec![ActionEntry::attack(Element::Fire, Direction::Straight, 0)],
        );

        apply_round(&mut p1, &mut p2, 0, &config).unwrap();
        assert_eq!(p1.hit_charge, 0);
        assert_eq!(p2.hit_charge, 1);
    }
}
