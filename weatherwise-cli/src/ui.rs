use anyhow::Context;
use inquire::{
    Confirm, CustomUserError, Text,
    autocompletion::{Autocomplete, Replacement},
};
use weatherwise_core::{
    ForecastDay, Phase, WeatherSnapshot, WeatherWidget, WidgetUi, render, suggest,
};

/// Prints the widget's fragments straight to stdout.
#[derive(Debug, Default)]
pub struct TerminalUi;

impl WidgetUi for TerminalUi {
    fn loading_started(&mut self) {
        println!("Fetching weather...");
    }

    fn loading_finished(&mut self) {}

    fn show_current(&mut self, snapshot: &WeatherSnapshot) {
        println!();
        print!("{}", render::current_fragment(snapshot));
    }

    fn show_forecast(&mut self, days: &[ForecastDay]) {
        println!("\n5-Day Forecast");
        print!("{}", render::forecast_fragment(days));
    }

    fn show_details(&mut self, snapshot: &WeatherSnapshot) {
        println!("\nDetails");
        print!("{}", render::details_fragment(snapshot));
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("! {message}");
    }

    fn hide_error(&mut self) {}

    fn show_recent(&mut self, cities: &[String]) {
        println!();
        print_recent(cities);
    }
}

pub fn print_recent(cities: &[String]) {
    if cities.is_empty() {
        println!("No recent searches");
        return;
    }

    println!("Recent searches: {}", cities.join(", "));
}

/// Autocomplete source for the dashboard prompt, backed by the static city
/// catalog. Accepting a suggestion completes to its canonical city name.
#[derive(Clone, Default)]
struct CitySuggester;

impl Autocomplete for CitySuggester {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        Ok(suggest::suggest(input, suggest::CITY_CATALOG)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion.map(|entry| suggest::canonical_city(&entry).to_string()))
    }
}

/// Interactive loop: prompt, search, repeat. Blank input (or Esc) exits.
pub async fn dashboard(mut widget: WeatherWidget<TerminalUi>) -> anyhow::Result<()> {
    println!("WeatherWise - type a city name; leave blank to quit.");
    print_recent(widget.recent());

    loop {
        println!();
        let input = Text::new("City:")
            .with_autocomplete(CitySuggester)
            .with_help_message("start typing for suggestions")
            .prompt_skippable()
            .context("dashboard input failed")?;

        let Some(city) = input else { break };
        if city.trim().is_empty() {
            break;
        }

        widget.submit(&city).await;

        if matches!(widget.phase(), Phase::Failure(_)) {
            Confirm::new("Dismiss and continue?")
                .with_default(true)
                .prompt()
                .context("dashboard input failed")?;
            widget.dismiss_error();
        }
    }

    Ok(())
}
