use async_trait::async_trait;
use chrono::{Days, Local, NaiveDate};

use crate::model::{ForecastDay, WeatherIcon, WeatherQuery, WeatherReport, WeatherSnapshot};

use super::{ProviderError, WeatherProvider};

/// City echoed back when the query carries coordinates instead of a name.
const LOCATION_CITY: &str = "Your Location";

/// Offline stand-in for a real weather service: answers every query with the
/// same demo reading, echoing the requested city into the snapshot.
#[derive(Debug, Clone, Default)]
pub struct DemoProvider;

impl DemoProvider {
    pub fn new() -> Self {
        Self
    }

    fn snapshot(city: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            city: city.to_string(),
            country: "US".to_string(),
            temperature_c: 22.0,
            feels_like_c: 25.0,
            description: "partly cloudy".to_string(),
            icon: WeatherIcon::Cloud,
            humidity_pct: 65,
            wind_speed_kmh: 12.0,
            pressure_hpa: 1013,
            visibility_km: 10.0,
            uv_index: 5,
        }
    }

    fn forecast(start: NaiveDate) -> Vec<ForecastDay> {
        const TEMPS: [(f64, f64); 5] =
            [(25.0, 18.0), (28.0, 20.0), (23.0, 16.0), (26.0, 19.0), (24.0, 17.0)];
        const ICONS: [WeatherIcon; 5] = [
            WeatherIcon::Cloud,
            WeatherIcon::Sun,
            WeatherIcon::Rain,
            WeatherIcon::Sun,
            WeatherIcon::Cloud,
        ];

        day_labels(start)
            .into_iter()
            .zip(TEMPS)
            .zip(ICONS)
            .map(|((label, (high_c, low_c)), icon)| ForecastDay {
                label,
                icon,
                high_c,
                low_c,
            })
            .collect()
    }
}

#[async_trait]
impl WeatherProvider for DemoProvider {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherReport, ProviderError> {
        let city = match query {
            WeatherQuery::City(name) => name.as_str(),
            WeatherQuery::Coordinates(_) => LOCATION_CITY,
        };

        Ok(WeatherReport {
            current: Self::snapshot(city),
            forecast: Self::forecast(Local::now().date_naive()),
        })
    }
}

/// Labels for the five forecast rows: today, tomorrow, then weekday names.
fn day_labels(start: NaiveDate) -> [String; 5] {
    std::array::from_fn(|i| match i {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => (start + Days::new(i as u64)).format("%A").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Coordinates;

    #[tokio::test]
    async fn echoes_the_requested_city() {
        let provider = DemoProvider::new();
        let query = WeatherQuery::City("Tokyo".to_string());

        let report = provider.fetch(&query).await.expect("demo fetch never fails");
        assert_eq!(report.current.city, "Tokyo");
        assert_eq!(report.current.temperature_c, 22.0);
        assert_eq!(report.current.description, "partly cloudy");
    }

    #[tokio::test]
    async fn coordinate_queries_resolve_to_your_location() {
        let provider = DemoProvider::new();
        let query = WeatherQuery::Coordinates(Coordinates {
            latitude: 51.5,
            longitude: -0.12,
        });

        let report = provider.fetch(&query).await.expect("demo fetch never fails");
        assert_eq!(report.current.city, "Your Location");
    }

    #[tokio::test]
    async fn forecast_has_five_days_today_first() {
        let provider = DemoProvider::new();
        let query = WeatherQuery::City("Berlin".to_string());

        let report = provider.fetch(&query).await.expect("demo fetch never fails");
        assert_eq!(report.forecast.len(), 5);
        assert_eq!(report.forecast[0].label, "Today");
        assert_eq!(report.forecast[0].high_c, 25.0);
        assert_eq!(report.forecast[0].low_c, 18.0);
        assert_eq!(report.forecast[1].icon, WeatherIcon::Sun);

        for day in &report.forecast {
            assert!(day.high_c >= day.low_c);
        }
    }

    #[test]
    fn day_labels_use_weekday_names_after_tomorrow() {
        // 2024-01-01 was a Monday.
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        let labels = day_labels(monday);
        assert_eq!(labels, ["Today", "Tomorrow", "Wednesday", "Thursday", "Friday"]);
    }
}
