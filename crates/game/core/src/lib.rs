//! Deterministic duel rules shared across the gesture pipeline and runtime.
//!
//! `duel-core` defines the canonical round rules (action entries, element
//! matchups, hit and charge resolution, damage, timeline reconciliation) and
//! exposes pure APIs that can be reused by the runtime and offline tools.
//! All per-match state mutation flows through [`engine::DuelEngine`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod timeline;

pub use action::{ActionCode, ActionEntry, ActionSequence, Direction, Element, EntryError};
pub use combat::{
    AppliedRound, CombatError, Matchup, RoundOutcome, SideOutcome, apply_damage, apply_round,
    calculate_damage, resolve_round,
};
pub use config::DuelConfig;
pub use engine::{DuelEngine, MatchReport, RoundReport, SideReport};
pub use error::{DuelError, ErrorSeverity};
pub use state::{MatchState, PlayerState, SequenceError, Side};
pub use timeline::{
    ClipKind, ClipPlacement, EffectPlacement, RoundTiming, TimingScheduler, Track, TrackTiming,
};
