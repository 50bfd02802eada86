//! Data-driven duel content and loaders.
//!
//! This crate houses the bundled data files and the loaders that read them:
//! - Duel, feature and session settings (TOML)
//! - Gesture rule tables (RON)
//! - Scripted match fixtures: recorded entries and replayable hand frames (TOML)
//!
//! Content is consumed by the runtime and the client; it never appears in
//! match state. Loaders deserialize duel-core and gesture types directly.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, DuelSettings, FixtureFrame, FixtureLoader, LoadResult,
    MatchFixture, PlayerScript, RuleTableLoader, SessionSettings,
};
