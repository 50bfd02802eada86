//! Round resolution result types.

use crate::state::Side;

/// What the round did to one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideOutcome {
    /// The player takes damage this round.
    pub hit: bool,

    /// Hit charge gained by a same-element parry.
    pub charge_gain: u32,
}

impl SideOutcome {
    pub const HIT: Self = Self {
        hit: true,
        charge_gain: 0,
    };

    pub const PARRY: Self = Self {
        hit: false,
        charge_gain: 1,
    };
}

/// Result of resolving one round for both players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundOutcome {
    pub p1: SideOutcome,
    pub p2: SideOutcome,
}

impl RoundOutcome {
    /// Neither side is affected.
    pub const QUIET: Self = Self {
        p1: SideOutcome {
            hit: false,
            charge_gain: 0,
        },
        p2: SideOutcome {
            hit: false,
            charge_gain: 0,
        },
    };

    /// Builds an outcome where only `side` is affected.
    pub fn only(side: Side, outcome: SideOutcome) -> Self {
        let mut result = Self::QUIET;
        *result.side_mut(side) = outcome;
        result
    }

    pub fn side(&self, side: Side) -> &SideOutcome {
        match side {
            Side::P1 => &self.p1,
            Side::P2 => &self.p2,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideOutcome {
        match side {
            Side::P1 => &mut self.p1,
            Side::P2 => &mut self.p2,
        }
    }

    /// The same outcome with the players swapped.
    pub const fn mirrored(self) -> Self {
        Self {
            p1: self.p2,
            p2: self.p1,
        }
    }
}
