use anyhow::Context;
use clap::{Parser, Subcommand};
use weatherwise_core::{
    Config, ProviderId, RecentSearches, StaticLocation, WeatherWidget,
    provider::provider_from_config,
};

use crate::ui::{self, TerminalUi};

/// Stand-in coordinates handed to the weather provider by `locate`, until a
/// real platform location service is wired in.
const DEMO_LATITUDE: f64 = 40.71;
const DEMO_LONGITUDE: f64 = -74.01;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherwise", version, about = "Terminal weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store an API key for a specific provider.
    Configure {
        /// Provider short name, e.g. "demo".
        provider: String,
    },

    /// Show weather for a city once and exit.
    Show {
        /// City name, e.g. "London".
        city: String,
    },

    /// Show weather for the current location.
    Locate,

    /// Print the recent-search list.
    Recent,

    /// Interactive dashboard with autocomplete and recent searches.
    Dashboard,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { provider } => configure(&provider),
            Command::Show { city } => {
                let mut widget = build_widget()?;
                widget.submit(&city).await;
                Ok(())
            }
            Command::Locate => {
                let mut widget = build_widget()?;
                widget.use_current_location().await;
                Ok(())
            }
            Command::Recent => {
                let config = Config::load()?;
                let recent = RecentSearches::load(config.recent_searches_file()?);
                ui::print_recent(recent.all());
                Ok(())
            }
            Command::Dashboard => ui::dashboard(build_widget()?).await,
        }
    }
}

fn build_widget() -> anyhow::Result<WeatherWidget<TerminalUi>> {
    let config = Config::load()?;
    let provider_id = config.default_provider_id()?;
    tracing::debug!(provider = %provider_id, "building widget");

    let provider = provider_from_config(provider_id, &config)?;
    let recent = RecentSearches::load(config.recent_searches_file()?);
    let location = Box::new(StaticLocation::new(DEMO_LATITUDE, DEMO_LONGITUDE));

    Ok(WeatherWidget::new(provider, location, recent, TerminalUi::default()))
}

fn configure(provider: &str) -> anyhow::Result<()> {
    let id = ProviderId::try_from(provider)?;
    let mut config = Config::load()?;

    if config.is_provider_configured(id) {
        let replace = inquire::Confirm::new(&format!("'{id}' already has an API key. Replace it?"))
            .with_default(false)
            .prompt()
            .context("configuration aborted")?;

        if !replace {
            return Ok(());
        }
    }

    let api_key = inquire::Password::new("API key:")
        .without_confirmation()
        .prompt()
        .context("configuration aborted")?;

    config.upsert_provider_api_key(id, api_key);
    config.save()?;

    println!("Saved configuration for provider '{id}'.");
    Ok(())
}
