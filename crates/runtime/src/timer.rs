//! Alternating turn timer.

use duel_core::Side;

use crate::api::{Result, RuntimeError};

/// Gives each player the turn for a fixed duration, starting with P1.
///
/// Time only moves through [`TurnTimer::advance`]. Overshoot carries into the
/// next turn, so one large step can pass several turns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnTimer {
    duration: f64,
    remaining: f64,
    active: Side,
    turn: u64,
}

impl TurnTimer {
    pub fn new(duration: f64) -> Result<Self> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(RuntimeError::InvalidTurnDuration { seconds: duration });
        }
        Ok(Self {
            duration,
            remaining: duration,
            active: Side::P1,
            turn: 0,
        })
    }

    pub fn active(&self) -> Side {
        self.active
    }

    /// Seconds left in the current turn.
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Index of the current turn, counting from 0.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Moves time forward and returns how many times the turn passed.
    ///
    /// The switch count is computed directly, so the cost of a step does not
    /// depend on its length. The turn counter saturates.
    pub fn advance(&mut self, elapsed: f64) -> Result<u64> {
        if !(elapsed.is_finite() && elapsed >= 0.0) {
            return Err(RuntimeError::InvalidElapsed { seconds: elapsed });
        }

        let remaining = self.remaining - elapsed;
        if remaining > 0.0 {
            self.remaining = remaining;
            return Ok(0);
        }

        let overshoot = -remaining;
        let switches = ((overshoot / self.duration).floor() as u64).saturating_add(1);

        if switches % 2 == 1 {
            self.active = self.active.opponent();
        }
        self.turn = self.turn.saturating_add(switches);
        self.remaining = self.duration - overshoot.rem_euclid(self.duration);

        Ok(switches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_alternate_every_duration() {
        let mut timer = TurnTimer::new(3.0).unwrap();
        assert_eq!(timer.active(), Side::P1);

        assert_eq!(timer.advance(2.5).unwrap(), 0);
        assert_eq!(timer.active(), Side::P1);

        assert_eq!(timer.advance(0.5).unwrap(), 1);
        assert_eq!(timer.active(), Side::P2);
        assert_eq!(timer.remaining(), 3.0);
        assert_eq!(timer.turn(), 1);
    }

    #[test]
    fn overshoot_carries_over() {
        let mut timer = TurnTimer::new(3.0).unwrap();

        assert_eq!(timer.advance(7.0).unwrap(), 2);
        assert_eq!(timer.active(), Side::P1);
        assert_eq!(timer.remaining(), 2.0);
    }

    #[test]
    fn rejects_bad_durations_and_steps() {
        assert!(matches!(
            TurnTimer::new(0.0),
            Err(RuntimeError::InvalidTurnDuration { .. })
        ));
        assert!(TurnTimer::new(f64::NAN).is_err());

        let mut timer = TurnTimer::new(1.0).unwrap();
        assert!(matches!(
            timer.advance(-0.1),
            Err(RuntimeError::InvalidElapsed { .. })
        ));
        assert!(timer.advance(f64::INFINITY).is_err());
        assert_eq!(timer.remaining(), 1.0);
    }

    #[test]
    fn huge_steps_are_constant_time() {
        let mut timer = TurnTimer::new(1.0).unwrap();

        assert_eq!(timer.advance(5.0e9).unwrap(), 5_000_000_000);
        assert_eq!(timer.active(), Side::P1);
        assert_eq!(timer.turn(), 5_000_000_000);
        assert_eq!(timer.remaining(), 1.0);

        assert_eq!(timer.advance(f64::MAX).unwrap(), u64::MAX);
        assert_eq!(timer.turn(), u64::MAX);
        assert!(timer.remaining() > 0.0 && timer.remaining() <= 1.0);
    }
}
