//! Runtime orchestration for a two-player gesture duel.
//!
//! This crate wires the gesture pipeline, the per-player action stores and the
//! duel engine into one [`MatchSession`]. Hosts drive the session explicitly:
//! [`MatchSession::advance`] moves the turn timer, [`MatchSession::submit_frame`]
//! feeds one camera frame for the active player, and [`MatchSession::fight`]
//! resolves the match.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session, its builder and configuration
//! - [`timer`] holds the alternating turn timer
//! - [`api`] exposes the error and frame outcome types clients handle
//! - [`events`] provides the topic-based event bus
pub mod api;
pub mod events;
pub mod session;
pub mod timer;

mod input;

pub use api::{FrameOutcome, ReplaySummary, Result, RuntimeError};
pub use events::{Event, EventBus, GestureEvent, MatchEvent, Topic, TurnEvent};
pub use session::{MatchSession, MatchSessionBuilder, SessionConfig};
pub use timer::TurnTimer;
