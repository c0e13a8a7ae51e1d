use crate::{
    error::WidgetError,
    history::RecentSearches,
    location::LocationProvider,
    model::{ForecastDay, WeatherQuery, WeatherSnapshot},
    provider::WeatherProvider,
    suggest::{self, CITY_CATALOG},
};

/// Where the widget currently is in its
/// `Idle -> Loading -> {Success, Failure} -> Idle` cycle. Success is
/// transient: a resolved search renders and immediately settles back to
/// `Idle`, so it never appears here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Failure(String),
}

/// Presentation seam. The widget drives one of these and stays free of any
/// terminal or markup concern; tests run against a recording fake.
pub trait WidgetUi {
    fn loading_started(&mut self);
    fn loading_finished(&mut self);
    fn show_current(&mut self, snapshot: &WeatherSnapshot);
    fn show_forecast(&mut self, days: &[ForecastDay]);
    fn show_details(&mut self, snapshot: &WeatherSnapshot);
    fn show_error(&mut self, message: &str);
    fn hide_error(&mut self);
    fn show_recent(&mut self, cities: &[String]);
}

/// The dashboard widget: one explicitly constructed instance owning its
/// provider, location source, recency log, and UI handle.
///
/// All weather data is transient: each search recomputes the report, nothing
/// is cached across searches, and the only long-lived state is the current
/// [`Phase`] and the recency log.
pub struct WeatherWidget<U: WidgetUi> {
    provider: Box<dyn WeatherProvider>,
    location: Box<dyn LocationProvider>,
    recent: RecentSearches,
    phase: Phase,
    ui: U,
}

impl<U: WidgetUi> WeatherWidget<U> {
    pub fn new(
        provider: Box<dyn WeatherProvider>,
        location: Box<dyn LocationProvider>,
        recent: RecentSearches,
        ui: U,
    ) -> Self {
        Self {
            provider,
            location,
            recent,
            phase: Phase::Idle,
            ui,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Recency log contents, most recent first.
    pub fn recent(&self) -> &[String] {
        self.recent.all()
    }

    /// Catalog entries matching `query`.
    pub fn suggestions(&self, query: &str) -> Vec<&'static str> {
        suggest::suggest(query, CITY_CATALOG)
    }

    /// Run a search for `raw` as typed by the user. Blank input fails without
    /// ever entering `Loading`; input arriving while a search is in flight is
    /// ignored.
    pub async fn submit(&mut self, raw: &str) {
        if self.phase == Phase::Loading {
            tracing::debug!(input = raw, "submit ignored while a search is in flight");
            return;
        }

        let city = raw.trim();
        if city.is_empty() {
            self.fail(&WidgetError::EmptyInput);
            return;
        }

        self.run_search(WeatherQuery::City(city.to_string())).await;
    }

    /// Accept an autocomplete entry ("City, CC") and search its city name.
    pub async fn select_suggestion(&mut self, entry: &str) {
        let city = suggest::canonical_city(entry).to_string();
        self.submit(&city).await;
    }

    /// The "use my location" action. An unsupported platform fails before
    /// `Loading` is ever entered; a granted position runs the same resolved
    /// flow as a typed search.
    pub async fn use_current_location(&mut self) {
        if self.phase == Phase::Loading {
            tracing::debug!("location request ignored while a search is in flight");
            return;
        }

        match self.location.current_position().await {
            Ok(coords) => self.run_search(WeatherQuery::Coordinates(coords)).await,
            Err(err) => self.fail(&WidgetError::from(err)),
        }
    }

    /// Dismiss the error banner; the widget is `Idle` again afterwards,
    /// whatever it was doing before.
    pub fn dismiss_error(&mut self) {
        self.ui.hide_error();
        self.phase = Phase::Idle;
    }

    async fn run_search(&mut self, query: WeatherQuery) {
        self.phase = Phase::Loading;
        self.ui.loading_started();

        match self.provider.fetch(&query).await {
            Ok(report) => {
                self.ui.show_current(&report.current);
                self.ui.show_forecast(&report.forecast);
                self.ui.show_details(&report.current);
                self.ui.loading_finished();

                self.recent.record(&report.current.city);
                self.ui.show_recent(self.recent.all());

                self.phase = Phase::Idle;
            }
            Err(err) => {
                self.ui.loading_finished();
                self.fail(&WidgetError::Fetch(err));
            }
        }
    }

    fn fail(&mut self, err: &WidgetError) {
        let message = err.to_string();
        self.ui.show_error(&message);
        self.phase = Phase::Failure(message);
    }

    #[cfg(test)]
    fn force_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}
