//! Settings loader.

use std::path::Path;

use duel_core::DuelConfig;
use gesture::FeatureConfig;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Turn-timer settings for an interactive session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Seconds each player holds the turn before it passes.
    pub turn_duration: f64,
}

impl SessionSettings {
    pub const DEFAULT_TURN_DURATION: f64 = 3.0;
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            turn_duration: Self::DEFAULT_TURN_DURATION,
        }
    }
}

/// Everything `config.toml` can set. Missing sections and keys use defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelSettings {
    pub duel: DuelConfig,
    pub features: FeatureConfig,
    pub session: SessionSettings,
}

/// Loader for duel settings from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from a TOML file.
    ///
    /// Rejects a `max_actions` outside `1..=DuelConfig::MAX_ACTIONS_CAP`, a
    /// non-positive or non-finite `max_health` or turn duration, and negative
    /// or non-finite clip durations.
    pub fn load(path: &Path) -> LoadResult<DuelSettings> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse settings from TOML text.
    pub fn parse(content: &str) -> LoadResult<DuelSettings> {
        let settings: DuelSettings = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let max_actions = settings.duel.max_actions;
        if !(1..=DuelConfig::MAX_ACTIONS_CAP).contains(&max_actions) {
            anyhow::bail!(
                "max_actions must be within 1..={}, got {}",
                DuelConfig::MAX_ACTIONS_CAP,
                max_actions
            );
        }
        let max_health = settings.duel.max_health;
        if !(max_health.is_finite() && max_health > 0.0) {
            anyhow::bail!("max_health must be positive, got {}", max_health);
        }
        for (name, duration) in [
            ("action_clip_duration", settings.duel.action_clip_duration),
            ("hit_clip_duration", settings.duel.hit_clip_duration),
        ] {
            if !(duration.is_finite() && duration >= 0.0) {
                anyhow::bail!("{} must be non-negative, got {}", name, duration);
            }
        }
        let turn_duration = settings.session.turn_duration;
        if !(turn_duration.is_finite() && turn_duration > 0.0) {
            anyhow::bail!("turn_duration must be positive, got {}", turn_duration);
        }

        Ok(settings)
    }
}
