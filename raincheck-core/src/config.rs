use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{forecast::SelectionStrategy, provider::metaweather::METAWEATHER_URL};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// base_url = "https://www.metaweather.com/"
/// strategy = "predictability"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the forecast service; request paths are joined onto it.
    pub base_url: String,

    /// How tomorrow's forecast is picked when the CLI does not say.
    pub strategy: SelectionStrategy,

    /// Per-request timeout. `None` waits indefinitely; a missing key in the
    /// file means the default.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: METAWEATHER_URL.to_string(),
            strategy: SelectionStrategy::default(),
            timeout_secs: Some(30),
        }
    }
}

impl Config {
    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "raincheck", "raincheck")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_metaweather() {
        let cfg = Config::default();
        assert_eq!(cfg.base_url, "https://www.metaweather.com/");
        assert_eq!(cfg.strategy, SelectionStrategy::Predictability);
        assert_eq!(cfg.timeout_secs, Some(30));
    }

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = Config::from_toml_str(r#"strategy = "exact-date""#).unwrap();
        assert_eq!(cfg.strategy, SelectionStrategy::ExactDate);
        assert_eq!(cfg.base_url, METAWEATHER_URL);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = Config::from_toml_str(r#"strategy = "newest""#).unwrap_err();
        assert!(err.to_string().contains("unknown variant"));
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = Config {
            base_url: "http://127.0.0.1:8080/".to_string(),
            strategy: SelectionStrategy::ExactDate,
            timeout_secs: Some(5),
        };
        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }
}
