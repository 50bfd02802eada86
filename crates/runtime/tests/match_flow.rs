//! End-to-end match flow: entries and camera frames in, match report out.

use duel_content::ContentFactory;
use duel_core::{ActionCode, ActionEntry, ClipKind, Direction, DuelConfig, Element, Side};
use gesture::{GestureCode, HandPose, LandmarkCoordinate};
use runtime::{MatchSession, RuntimeError, SessionConfig};

fn entry(code: &str) -> ActionEntry {
    code.parse().unwrap()
}

fn session_with(max_actions: usize) -> MatchSession {
    MatchSession::builder()
        .duel_config(DuelConfig::with_max_actions(max_actions))
        .build()
        .unwrap()
}

fn sample_session() -> MatchSession {
    let factory = ContentFactory::bundled();
    let settings = factory.load_settings().unwrap();
    let rules = factory.load_rules().unwrap();

    MatchSession::builder()
        .config(SessionConfig::from(settings))
        .rules(rules)
        .build()
        .unwrap()
}

#[test]
fn losing_element_in_attack_trade_is_hit() {
    let mut session = session_with(1);
    session.record_entry(Side::P1, entry("PF+00")).unwrap();
    session.record_entry(Side::P2, entry("PW+00")).unwrap();

    let report = session.fight().unwrap();
    let round = &report.rounds[0];

    // Water beats Fire.
    assert!(round.p1.hit);
    assert!(!round.p2.hit);
    assert_eq!(report.winner, Some(Side::P2));
}

#[test]
fn same_element_parry_charges_without_hits() {
    let mut session = session_with(1);
    session.record_entry(Side::P1, entry("DF=00")).unwrap();
    session.record_entry(Side::P2, entry("PF=00")).unwrap();

    let report = session.fight().unwrap();
    let round = &report.rounds[0];

    assert!(!round.p1.hit && !round.p2.hit);
    assert_eq!(round.p1.charge_gain, 1);
    assert_eq!(session.state().p1.hit_charge, 2);
    assert_eq!(report.winner, None);
}

#[test]
fn idle_player_is_hit() {
    let mut session = session_with(1);
    session.record_entry(Side::P2, entry("PG=00")).unwrap();

    let report = session.fight().unwrap();

    assert!(report.rounds[0].p1.hit);
    assert!(!report.rounds[0].p2.hit);
    assert_eq!(report.rounds[0].p1.entry, ActionEntry::neutral());
}

#[test]
fn parry_charge_scales_the_next_hit() {
    let mut session = session_with(2);
    session.record_entry(Side::P1, entry("DF=00")).unwrap();
    session.record_entry(Side::P1, entry("NN=10")).unwrap();
    session.record_entry(Side::P2, entry("PF=00")).unwrap();
    session.record_entry(Side::P2, entry("PG+55")).unwrap();

    let report = session.fight().unwrap();
    let hit = &report.rounds[1].p1;

    assert!(hit.hit);
    assert_eq!(hit.damage, 3.0);
    assert_eq!(report.p1_health, 97.0);
    assert_eq!(session.state().p1.hit_charge, 1);
}

#[test]
fn unhit_track_is_padded_to_the_hit_track() {
    let mut session = session_with(1);
    session.record_entry(Side::P1, entry("PF=00")).unwrap();
    session.record_entry(Side::P2, entry("PG=00")).unwrap();

    let report = session.fight().unwrap();
    let round = &report.rounds[0];

    assert!(round.p2.hit);
    assert_eq!(round.p2.timing.total_duration(), 4.0);

    let filler = round.p1.timing.filler.unwrap();
    assert_eq!(filler.kind, ClipKind::Filler);
    assert_eq!(filler.duration, 2.0);

    assert_eq!(session.state().p1.track.cursor(), 4.0);
    assert_eq!(session.state().p2.track.cursor(), 4.0);
}

#[test]
fn sample_fixture_replays_into_entries() {
    let fixture = ContentFactory::bundled().load_fixture("sample").unwrap();
    let mut session = sample_session();

    let summary = session.replay(&fixture).unwrap();
    assert_eq!(summary.frames, 9);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.entries, 4);

    let p1: Vec<_> = session.state().p1.sequence.iter().copied().collect();
    let p2: Vec<_> = session.state().p2.sequence.iter().copied().collect();

    assert_eq!(p1[0].action, ActionCode::Attack);
    assert_eq!(p1[0].element, Some(Element::Fire));
    assert_eq!(p1[0].direction, Direction::Right);
    assert_eq!(p1[1].action, ActionCode::Defend);
    assert_eq!(p1[1].element, Some(Element::Grass));
    assert_eq!(p1[1].direction, Direction::Straight);

    assert_eq!(p2[0].action, ActionCode::Defend);
    assert_eq!(p2[0].element, Some(Element::Water));
    assert_eq!(p2[0].direction, Direction::Left);
    assert_eq!(p2[1].action, ActionCode::Attack);
    assert_eq!(p2[1].element, Some(Element::Grass));
    assert_eq!(p2[1].direction, Direction::Straight);

    assert_eq!(session.gestures(Side::P1).symbols(), "PFDG");
    assert_eq!(session.gestures(Side::P2).symbols(), "DWPG");

    let report = session.fight().unwrap();
    assert!(report.rounds.iter().all(|r| !r.p1.hit && !r.p2.hit));
    assert_eq!(session.state().p1.hit_charge, 2);
    assert_eq!(report.winner, None);
}

#[test]
fn replays_are_deterministic() {
    let fixture = ContentFactory::bundled().load_fixture("sample").unwrap();

    let digests: Vec<String> = (0..2)
        .map(|_| {
            let mut session = sample_session();
            session.replay(&fixture).unwrap();
            hex::encode(session.fight().unwrap().digest())
        })
        .collect();

    assert_eq!(digests[0], digests[1]);
    assert_eq!(digests[0].len(), 64);
}

#[test]
fn short_landmark_frames_are_dropped() {
    let mut session = session_with(5);
    let short = vec![LandmarkCoordinate::new(0.5, 0.5, 0.0); 5];

    let outcome = session.submit_frame(Side::P1, &short).unwrap();

    assert!(outcome.malformed);
    assert_eq!(outcome.gesture, None);
    assert!(session.gestures(Side::P1).is_empty());
}

#[test]
fn frames_outside_the_turn_are_rejected() {
    let mut session = session_with(5);
    let hand = HandPose::for_code(GestureCode::Attack).landmarks();

    let err = session.submit_frame(Side::P2, &hand).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::OutOfTurn {
            side: Side::P2,
            active: Side::P1
        }
    ));

    session.advance(3.0).unwrap();
    assert!(session.submit_frame(Side::P2, &hand).unwrap().fresh);
}
