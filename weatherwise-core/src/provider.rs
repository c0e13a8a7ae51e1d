use crate::{
    Config,
    model::{WeatherQuery, WeatherReport},
    provider::demo::DemoProvider,
};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};
use thiserror::Error;

pub mod demo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Demo,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Demo => "demo",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::Demo]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "demo" => Ok(ProviderId::Demo),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: demo."
            )),
        }
    }
}

/// Failures the provider seam can produce. The bundled demo provider never
/// returns any of these; a real HTTP client slotted in behind
/// [`WeatherProvider`] would.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no weather data found for '{0}'")]
    NotFound(String),

    #[error("rate limited by the weather service")]
    RateLimited,

    #[error("network failure: {0}")]
    Network(String),
}

/// One weather lookup: the single suspension point of a widget action.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherReport, ProviderError>;
}

/// Construct a provider from config and explicit ProviderId.
pub fn provider_from_config(
    id: ProviderId,
    _config: &Config,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    // The demo provider ignores its configured API key (a placeholder); a
    // real provider would fail here when the key is missing.
    let boxed: Box<dyn WeatherProvider> = match id {
        ProviderId::Demo => Box::new(DemoProvider::new()),
    };

    Ok(boxed)
}

/// Construct the default provider from config, falling back to the demo
/// provider when none is configured.
pub fn default_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let id = config.default_provider_id()?;
    provider_from_config(id, config)
}
