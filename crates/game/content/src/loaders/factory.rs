//! Content factory for loading everything from one data directory.

use std::path::{Path, PathBuf};

use gesture::RuleTable;

use crate::loaders::{
    ConfigLoader, DuelSettings, FixtureLoader, LoadResult, MatchFixture, RuleTableLoader,
};

/// Content factory that loads duel content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── rules.ron
/// └── fixtures/
///     └── sample.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load settings from `config.toml`.
    pub fn load_settings(&self) -> LoadResult<DuelSettings> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the gesture rule table from `rules.ron`.
    pub fn load_rules(&self) -> LoadResult<RuleTable> {
        RuleTableLoader::load(&self.data_dir.join("rules.ron"))
    }

    /// Load `fixtures/<name>.toml`.
    pub fn load_fixture(&self, name: &str) -> LoadResult<MatchFixture> {
        let path = self.data_dir.join("fixtures").join(format!("{}.toml", name));
        FixtureLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
