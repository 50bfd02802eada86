//! Round combat resolution.
//!
//! This module provides pure functions for resolving one round of a duel.
//! All combat logic is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `resolve_round`: action/element matchup for both players (hit flags + charge)
//! - `Element::versus`: the single cyclic element matchup
//! - `calculate_damage`: angle-spread damage scaled by the hit side's charge
//! - `apply_damage`: health reduction (clamped to 0)
//! - `apply_round`: resolve a round and apply it to both players' state

pub mod damage;
pub mod element;
pub mod error;
pub mod hit;
pub mod result;
pub mod round;

pub use damage::{apply_damage, calculate_damage};
pub use element::Matchup;
pub use error::CombatError;
pub use hit::resolve_round;
pub use result::{RoundOutcome, SideOutcome};
pub use round::{AppliedRound, apply_round};
