//! Client configuration read from the environment.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use duel_content::{
    ConfigLoader, ContentFactory, DuelSettings, FixtureLoader, LoadResult, MatchFixture,
    RuleTableLoader,
};
use gesture::RuleTable;

/// Where the client reads content from and how it runs the replay.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Settings file overriding the bundled `config.toml`.
    pub config_path: Option<PathBuf>,
    /// Rule table overriding the bundled `rules.ron`.
    pub rules_path: Option<PathBuf>,
    /// Bundled fixture name or path to a fixture file.
    pub fixture: String,
    pub session_id: Option<String>,
    /// Sleep between frames so the replay runs at recorded speed.
    pub realtime: bool,
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            rules_path: None,
            fixture: "sample".to_string(),
            session_id: None,
            realtime: false,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.config_path = env::var("DUEL_CONFIG").ok().map(PathBuf::from);
        config.rules_path = env::var("DUEL_RULES").ok().map(PathBuf::from);

        if let Ok(fixture) = env::var("DUEL_FIXTURE") {
            config.fixture = fixture;
        }

        config.session_id = env::var("DUEL_SESSION_ID").ok();

        if let Some(realtime) = read_env::<bool>("DUEL_REALTIME") {
            config.realtime = realtime;
        }

        config.log_dir = env::var("DUEL_LOG_DIR").ok().map(PathBuf::from);

        config
    }

    pub fn load_settings(&self, factory: &ContentFactory) -> LoadResult<DuelSettings> {
        match &self.config_path {
            Some(path) => ConfigLoader::load(path),
            None => factory.load_settings(),
        }
    }

    pub fn load_rules(&self, factory: &ContentFactory) -> LoadResult<RuleTable> {
        match &self.rules_path {
            Some(path) => RuleTableLoader::load(path),
            None => factory.load_rules(),
        }
    }

    /// Loads the fixture from a file when `fixture` names one, otherwise from
    /// the bundled fixtures.
    pub fn load_fixture(&self, factory: &ContentFactory) -> LoadResult<MatchFixture> {
        let path = Path::new(&self.fixture);
        if path.is_file() {
            return FixtureLoader::load(path);
        }
        factory
            .load_fixture(&self.fixture)
            .with_context(|| format!("Unknown fixture '{}'", self.fixture))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_bundled_content() {
        let config = ClientConfig::default();
        let factory = ContentFactory::bundled();

        assert_eq!(config.fixture, "sample");
        assert!(config.load_settings(&factory).is_ok());
        assert_eq!(config.load_rules(&factory).unwrap(), RuleTable::canonical());
        assert_eq!(config.load_fixture(&factory).unwrap().name, "sample");
    }

    #[test]
    fn fixture_can_be_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solo.toml");
        std::fs::write(&path, "name = \"solo\"\n[p1]\nentries = [\"PF+10\"]\n").unwrap();

        let config = ClientConfig {
            fixture: path.display().to_string(),
            ..ClientConfig::default()
        };

        let fixture = config.load_fixture(&ContentFactory::bundled()).unwrap();
        assert_eq!(fixture.name, "solo");
    }

    #[test]
    fn unknown_fixture_is_an_error() {
        let config = ClientConfig {
            fixture: "missing".to_string(),
            ..ClientConfig::default()
        };

        assert!(config.load_fixture(&ContentFactory::bundled()).is_err());
    }
}
