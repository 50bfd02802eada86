//! Match session orchestrator.
//!
//! The session owns the turn timer, both players' input pipelines and the
//! match state. It is synchronous: the host calls [`MatchSession::advance`]
//! and [`MatchSession::submit_frame`] at its own pace, then
//! [`MatchSession::fight`] once.

use duel_content::{DuelSettings, FixtureFrame, MatchFixture};
use duel_core::{ActionEntry, DuelConfig, DuelEngine, MatchReport, MatchState, Side};
use gesture::{FeatureConfig, GestureQueue, LandmarkCoordinate, RuleTable};
use tokio::sync::broadcast;

use crate::api::{FrameOutcome, ReplaySummary, Result, RuntimeError};
use crate::events::{Event, EventBus, GestureEvent, MatchEvent, Topic, TurnEvent};
use crate::input::PlayerInput;
use crate::timer::TurnTimer;

/// Session configuration shared by the timer, the pipelines and the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub duel: DuelConfig,
    pub features: FeatureConfig,
    /// Seconds each player holds the turn.
    pub turn_duration: f64,
    pub event_buffer_size: usize,
}

impl SessionConfig {
    pub const DEFAULT_TURN_DURATION: f64 = 3.0;
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duel: DuelConfig::default(),
            features: FeatureConfig::default(),
            turn_duration: Self::DEFAULT_TURN_DURATION,
            event_buffer_size: 100,
        }
    }
}

impl From<DuelSettings> for SessionConfig {
    fn from(settings: DuelSettings) -> Self {
        Self {
            duel: settings.duel,
            features: settings.features,
            turn_duration: settings.session.turn_duration,
            ..Self::default()
        }
    }
}

/// One match between two players.
pub struct MatchSession {
    config: SessionConfig,
    rules: RuleTable,
    timer: TurnTimer,
    state: MatchState,
    p1_input: PlayerInput,
    p2_input: PlayerInput,
    events: EventBus,
    clock: f64,
    report: Option<MatchReport>,
}

impl MatchSession {
    /// Create a new session builder
    pub fn builder() -> MatchSessionBuilder {
        MatchSessionBuilder::new()
    }

    pub fn new(config: SessionConfig, rules: RuleTable) -> Result<Self> {
        let timer = TurnTimer::new(config.turn_duration)?;
        let state = MatchState::new(&config.duel)?;

        tracing::info!(
            max_actions = config.duel.max_actions,
            turn_duration = config.turn_duration,
            rules = rules.len(),
            "match session created"
        );

        Ok(Self {
            p1_input: PlayerInput::new(&config.features),
            p2_input: PlayerInput::new(&config.features),
            events: EventBus::with_capacity(config.event_buffer_size),
            config,
            rules,
            timer,
            state,
            clock: 0.0,
            report: None,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn timer(&self) -> &TurnTimer {
        &self.timer
    }

    /// Seconds since the session started.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// The player whose frames are accepted right now.
    pub fn active_side(&self) -> Side {
        self.timer.active()
    }

    /// The player's most recent gestures, oldest first.
    pub fn gestures(&self, side: Side) -> &GestureQueue {
        self.input(side).queue()
    }

    /// The report of a resolved match.
    pub fn report(&self) -> Option<&MatchReport> {
        self.report.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.report.is_some()
    }

    /// Subscribe to session events on `topic`.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    /// Subscribe to several topics at once, one receiver per topic.
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        self.events.subscribe_multiple(topics)
    }

    fn input(&self, side: Side) -> &PlayerInput {
        match side {
            Side::P1 => &self.p1_input,
            Side::P2 => &self.p2_input,
        }
    }

    fn input_mut(&mut self, side: Side) -> &mut PlayerInput {
        match side {
            Side::P1 => &mut self.p1_input,
            Side::P2 => &mut self.p2_input,
        }
    }

    fn ensure_running(&self) -> Result<()> {
        if self.is_finished() {
            return Err(RuntimeError::Finished);
        }
        Ok(())
    }

    /// Moves the session clock forward by `elapsed` seconds.
    ///
    /// Returns the new active side when the turn passed at least once. A
    /// player losing the turn also loses any action still waiting for an
    /// element.
    pub fn advance(&mut self, elapsed: f64) -> Result<Option<Side>> {
        self.ensure_running()?;

        let before = self.timer.active();
        let switches = self.timer.advance(elapsed)?;
        self.clock += elapsed;

        if switches == 0 {
            return Ok(None);
        }

        // With an even number of switches the same player ends up active,
        // but the other player still had (and lost) turns in between.
        self.input_mut(before).end_turn();
        self.input_mut(before.opponent()).end_turn();

        let active = self.timer.active();
        tracing::info!(side = %active, turn = self.timer.turn(), at = self.clock, "turn started");
        self.events.publish(Event::Turn(TurnEvent {
            side: active,
            turn: self.timer.turn(),
            at: self.clock,
        }));

        Ok(Some(active))
    }

    /// Advances the clock to `at` seconds; earlier times leave it unchanged.
    pub fn advance_to(&mut self, at: f64) -> Result<Option<Side>> {
        if !at.is_finite() {
            return Err(RuntimeError::InvalidElapsed { seconds: at });
        }
        self.advance((at - self.clock).max(0.0))
    }

    /// Feeds one camera frame for `side`.
    ///
    /// Only the active player may submit. Malformed landmarks are dropped
    /// with a warning and reported through [`FrameOutcome::malformed`].
    pub fn submit_frame(
        &mut self,
        side: Side,
        landmarks: &[LandmarkCoordinate],
    ) -> Result<FrameOutcome> {
        self.ensure_running()?;

        let active = self.timer.active();
        if side != active {
            return Err(RuntimeError::OutOfTurn { side, active });
        }

        let features = self.config.features;
        let rules = &self.rules;
        let input = match side {
            Side::P1 => &mut self.p1_input,
            Side::P2 => &mut self.p2_input,
        };

        let Some(recognition) = input.recognise(landmarks, &features, rules) else {
            return Ok(FrameOutcome::malformed());
        };

        if recognition.fresh
            && let Some(code) = recognition.gesture
        {
            let recent = input.queue().symbols();
            tracing::debug!(%side, %code, %recent, "gesture recognised");
            self.events.publish(Event::Gesture(GestureEvent::Recognised {
                side,
                code,
                recent,
            }));
        }

        let evicted = match recognition.entry {
            Some(entry) => self.record_entry(side, entry)?,
            None => None,
        };

        Ok(FrameOutcome {
            gesture: recognition.gesture,
            fresh: recognition.fresh,
            entry: recognition.entry,
            evicted,
            malformed: false,
        })
    }

    /// Stores an entry for `side`, returning the evicted oldest entry if the
    /// sequence was full. Turn ownership is not checked.
    pub fn record_entry(&mut self, side: Side, entry: ActionEntry) -> Result<Option<ActionEntry>> {
        self.ensure_running()?;

        let evicted = self.state.player_mut(side).sequence.push(entry);
        tracing::info!(%side, %entry, evicted = ?evicted.map(|e| e.to_string()), "entry recorded");
        self.events.publish(Event::Gesture(GestureEvent::EntryRecorded {
            side,
            entry,
            evicted,
        }));

        Ok(evicted)
    }

    /// Replays one fixture frame: advance to its time, then submit it.
    ///
    /// Frames outside their player's turn come back as [`RuntimeError::OutOfTurn`].
    pub fn replay_frame(&mut self, side: Side, frame: &FixtureFrame) -> Result<FrameOutcome> {
        let hand = frame.hand().map_err(|e| RuntimeError::Fixture {
            at: frame.at,
            reason: e.to_string(),
        })?;
        self.advance_to(frame.at)?;
        self.submit_frame(side, &hand)
    }

    /// Records every entry the fixture scripts up front. Returns how many.
    pub fn record_script(&mut self, fixture: &MatchFixture) -> Result<usize> {
        let mut recorded = 0;
        for side in Side::BOTH {
            for &entry in &fixture.script(side).entries {
                self.record_entry(side, entry)?;
                recorded += 1;
            }
        }
        Ok(recorded)
    }

    /// Records a fixture's entries, then replays its frames in time order.
    ///
    /// Out-of-turn frames are skipped with a warning; every other error stops
    /// the replay.
    pub fn replay(&mut self, fixture: &MatchFixture) -> Result<ReplaySummary> {
        let mut summary = ReplaySummary {
            entries: self.record_script(fixture)?,
            ..ReplaySummary::default()
        };

        for (side, frame) in fixture.timeline() {
            summary.tally(self.replay_frame(side, frame))?;
        }

        tracing::info!(fixture = %fixture.name, ?summary, "fixture replayed");
        Ok(summary)
    }

    /// Resolves the match from the recorded entries.
    ///
    /// Can be called once; afterwards the session only serves the report.
    pub fn fight(&mut self) -> Result<MatchReport> {
        self.ensure_running()?;

        let report = DuelEngine::new(&mut self.state, &self.config.duel).fight()?;

        tracing::info!(
            winner = ?report.winner,
            p1_health = report.p1_health,
            p2_health = report.p2_health,
            "match resolved"
        );
        self.events.publish(Event::Match(MatchEvent::Resolved {
            winner: report.winner,
            p1_health: report.p1_health,
            p2_health: report.p2_health,
        }));

        self.report = Some(report.clone());
        Ok(report)
    }
}

/// Builder for [`MatchSession`] with flexible configuration.
pub struct MatchSessionBuilder {
    config: SessionConfig,
    rules: Option<RuleTable>,
}

impl MatchSessionBuilder {
    fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            rules: None,
        }
    }

    /// Override session configuration
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the duel rules configuration
    pub fn duel_config(mut self, duel: DuelConfig) -> Self {
        self.config.duel = duel;
        self
    }

    pub fn turn_duration(mut self, seconds: f64) -> Self {
        self.config.turn_duration = seconds;
        self
    }

    /// Set the gesture rule table. Defaults to the canonical table.
    pub fn rules(mut self, rules: RuleTable) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn build(self) -> Result<MatchSession> {
        MatchSession::new(self.config, self.rules.unwrap_or_else(RuleTable::canonical))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesture::{GestureCode, HandPose};

    fn frame(code: GestureCode) -> [LandmarkCoordinate; 21] {
        HandPose::for_code(code).landmarks()
    }

    #[test]
    fn turn_switch_drops_armed_action() {
        let mut session = MatchSession::builder().build().unwrap();

        session.submit_frame(Side::P1, &frame(GestureCode::Attack)).unwrap();
        session.advance(3.0).unwrap();
        session.advance(3.0).unwrap();

        let outcome = session.submit_frame(Side::P1, &frame(GestureCode::Fire)).unwrap();
        assert!(outcome.fresh);
        assert_eq!(outcome.entry, None);
        assert!(session.state().p1.sequence.is_empty());
    }

    #[test]
    fn advance_reports_the_new_side() {
        let mut session = MatchSession::builder().turn_duration(1.0).build().unwrap();

        assert_eq!(session.advance(0.5).unwrap(), None);
        assert_eq!(session.advance(0.5).unwrap(), Some(Side::P2));
        assert_eq!(session.advance_to(0.2).unwrap(), None);
        assert_eq!(session.clock(), 1.0);
    }

    #[test]
    fn finished_sessions_reject_input() {
        let mut session = MatchSession::builder().build().unwrap();
        session.fight().unwrap();

        assert!(session.is_finished());
        assert!(matches!(session.fight(), Err(RuntimeError::Finished)));
        assert!(matches!(session.advance(1.0), Err(RuntimeError::Finished)));
        assert!(matches!(
            session.submit_frame(Side::P1, &frame(GestureCode::Water)),
            Err(RuntimeError::Finished)
        ));
    }

    #[test]
    fn events_follow_the_pipeline() {
        let mut session = MatchSession::builder().build().unwrap();
        let mut gestures = session.subscribe(Topic::Gesture);
        let mut turns = session.subscribe(Topic::Turn);

        session.submit_frame(Side::P1, &frame(GestureCode::Defend)).unwrap();
        session.submit_frame(Side::P1, &frame(GestureCode::Water)).unwrap();
        session.advance(3.0).unwrap();

        assert!(matches!(
            gestures.try_recv(),
            Ok(Event::Gesture(GestureEvent::Recognised { code: GestureCode::Defend, .. }))
        ));
        assert!(matches!(
            gestures.try_recv(),
            Ok(Event::Gesture(GestureEvent::Recognised { code: GestureCode::Water, .. }))
        ));
        assert!(matches!(
            gestures.try_recv(),
            Ok(Event::Gesture(GestureEvent::EntryRecorded { side: Side::P1, .. }))
        ));
        assert!(matches!(
            turns.try_recv(),
            Ok(Event::Turn(TurnEvent { side: Side::P2, turn: 1, .. }))
        ));
    }
}
