//! Hit and charge determination for one round.

use crate::action::{ActionCode, ActionEntry, Element};
use crate::state::Side;

use super::element::Matchup;
use super::error::CombatError;
use super::result::{RoundOutcome, SideOutcome};

/// Resolve which players are hit in `round`, and who gains charge.
///
/// A missing entry (the player recorded fewer rounds) is the neutral entry.
///
/// # Rules
///
/// ```text
/// same action:
///   none   vs none    => nothing
///   defend vs defend  => nothing (mutual block)
///   attack vs attack  => equal elements: both hit, else the element loser is hit
/// different actions:
///   none   vs attack  => the idle side is hit
///   none   vs defend  => nothing
///   defend vs attack  => equal elements: defender gains 1 charge, nobody is hit
///                        defender's element beats attacker's: attack negated
///                        otherwise: defender is hit
/// ```
///
/// # Errors
///
/// [`CombatError::MissingElement`] when an attack or defense carries no element.
pub fn resolve_round(
    round: usize,
    p1: Option<&ActionEntry>,
    p2: Option<&ActionEntry>,
) -> Result<RoundOutcome, CombatError> {
    let p1 = p1.copied().unwrap_or_else(ActionEntry::neutral);
    let p2 = p2.copied().unwrap_or_else(ActionEntry::neutral);

    validate(round, Side::P1, &p1)?;
    validate(round, Side::P2, &p2)?;

    let outcome = match (p1.action, p2.action) {
        (ActionCode::None, ActionCode::None) | (ActionCode::Defend, ActionCode::Defend) => {
            RoundOutcome::QUIET
        }

        (ActionCode::Attack, ActionCode::Attack) => {
            match element_of(&p1).versus(element_of(&p2)) {
                Matchup::Draw => RoundOutcome {
                    p1: SideOutcome::HIT,
                    p2: SideOutcome::HIT,
                },
                Matchup::Win => RoundOutcome::only(Side::P2, SideOutcome::HIT),
                Matchup::Loss => RoundOutcome::only(Side::P1, SideOutcome::HIT),
            }
        }

        (ActionCode::None, ActionCode::Attack) => RoundOutcome::only(Side::P1, SideOutcome::HIT),
        (ActionCode::Attack, ActionCode::None) => RoundOutcome::only(Side::P2, SideOutcome::HIT),

        (ActionCode::None, ActionCode::Defend) | (ActionCode::Defend, ActionCode::None) => {
            RoundOutcome::QUIET
        }

        (ActionCode::Defend, ActionCode::Attack) => {
            RoundOutcome::only(Side::P1, parry(element_of(&p1), element_of(&p2)))
        }
        (ActionCode::Attack, ActionCode::Defend) => {
            RoundOutcome::only(Side::P2, parry(element_of(&p2), element_of(&p1)))
        }
    };

    Ok(outcome)
}

/// Defender's side of a defend-vs-attack exchange.
fn parry(defender: Element, attacker: Element) -> SideOutcome {
    match defender.versus(attacker) {
        Matchup::Draw => SideOutcome::PARRY,
        Matchup::Win => SideOutcome::default(),
        Matchup::Loss => SideOutcome::HIT,
    }
}

fn validate(round: usize, side: Side, entry: &ActionEntry) -> Result<(), CombatError> {
    if entry.action.is_elemental() && entry.element.is_none() {
        return Err(CombatError::MissingElement {
            side,
            action: entry.action,
            round,
        });
    }
    Ok(())
}

// Only called after `validate` accepted the entry.
fn element_of(entry: &ActionEntry) -> Element {
    entry.element.unwrap_or(Element::Fire)
}
