//! Content loaders for reading duel data from files.
//!
//! Every loader returns [`LoadResult`]; parse failures carry the offending
//! path so the binary can report them as-is.

pub mod config;
pub mod factory;
pub mod fixture;
pub mod rules;

pub use config::{ConfigLoader, DuelSettings, SessionSettings};
pub use factory::ContentFactory;
pub use fixture::{FixtureFrame, FixtureLoader, MatchFixture, PlayerScript};
pub use rules::RuleTableLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
