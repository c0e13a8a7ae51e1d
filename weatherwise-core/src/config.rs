use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::PathBuf};

use crate::{history::RecentSearches, provider::ProviderId};

/// Settings for a single provider. The demo provider ignores its key (a
/// placeholder); the field exists so a real provider can be slotted in
/// without a config migration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional default provider id, e.g. "demo".
    pub default_provider: Option<String>,

    /// Example TOML:
    /// [providers.demo]
    /// api_key = "demo_key"
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,

    /// Overrides the platform-default location of the recent-searches file.
    #[serde(default)]
    pub recent_searches_path: Option<PathBuf>,
}

impl Config {
    /// Default provider as a strongly-typed ProviderId; the demo provider
    /// when the file does not name one.
    pub fn default_provider_id(&self) -> Result<ProviderId> {
        match self.default_provider.as_deref() {
            Some(s) => ProviderId::try_from(s),
            None => Ok(ProviderId::Demo),
        }
    }

    /// Store default provider as string.
    pub fn set_default_provider(&mut self, id: ProviderId) {
        self.default_provider = Some(id.as_str().to_string());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
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

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherwise", "weatherwise")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Where the recency log lives under this config.
    pub fn recent_searches_file(&self) -> Result<PathBuf> {
        match &self.recent_searches_path {
            Some(path) => Ok(path.clone()),
            None => RecentSearches::default_path(),
        }
    }

    /// Set/replace a provider API key and make it the default provider if
    /// none is set yet.
    pub fn upsert_provider_api_key(&mut self, provider_id: ProviderId, api_key: String) {
        self.providers.insert(provider_id.as_str().to_string(), ProviderConfig { api_key });

        if self.default_provider.is_none() {
            self.default_provider = Some(provider_id.to_string());
        }
    }

    /// Returns API key for a provider, if present.
    pub fn provider_api_key(&self, provider_id: ProviderId) -> Option<&str> {
        self.providers.get(provider_id.as_str()).map(|cfg| cfg.api_key.as_str())
    }

    pub fn is_provider_configured(&self, provider_id: ProviderId) -> bool {
        self.provider_api_key(provider_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderId;

    #[test]
    fn default_provider_id_falls_back_to_demo() {
        let cfg = Config::default();
        let id = cfg.default_provider_id().expect("fallback must succeed");
        assert_eq!(id, ProviderId::Demo);
    }

    #[test]
    fn default_provider_id_rejects_unknown_names() {
        let cfg = Config {
            default_provider: Some("doesnotexist".to_string()),
            ..Config::default()
        };

        let err = cfg.default_provider_id().unwrap_err();
        assert!(err.to_string().contains("Unknown provider"));
    }

    #[test]
    fn upsert_sets_api_key_and_default() {
        let mut cfg = Config::default();

        cfg.upsert_provider_api_key(ProviderId::Demo, "demo_key".into());

        assert_eq!(cfg.default_provider.as_deref(), Some("demo"));
        assert_eq!(cfg.provider_api_key(ProviderId::Demo), Some("demo_key"));
        assert!(cfg.is_provider_configured(ProviderId::Demo));
    }

    #[test]
    fn set_default_provider_overrides_default() {
        let mut cfg = Config::default();
        cfg.default_provider = Some("something-else".to_string());

        cfg.set_default_provider(ProviderId::Demo);
        assert_eq!(cfg.default_provider.as_deref(), Some("demo"));
    }

    #[test]
    fn recent_searches_path_override_wins() {
        let cfg = Config {
            recent_searches_path: Some(PathBuf::from("/tmp/weatherwise/recent.json")),
            ..Config::default()
        };

        let path = cfg.recent_searches_file().expect("override path is returned as-is");
        assert_eq!(path, PathBuf::from("/tmp/weatherwise/recent.json"));
    }

    #[test]
    fn parses_the_documented_toml_shape() {
        let cfg: Config = toml::from_str(
            r#"
            default_provider = "demo"

            [providers.demo]
            api_key = "demo_key"
            "#,
        )
        .expect("example config must parse");

        assert_eq!(cfg.default_provider_id().expect("valid id"), ProviderId::Demo);
        assert_eq!(cfg.provider_api_key(ProviderId::Demo), Some("demo_key"));
        assert!(cfg.recent_searches_path.is_none());
    }
}
