use serde::{Deserialize, Serialize};

use crate::location::Coordinates;

/// Request passed to a weather provider: a free-form city name typed by the
/// user, or a coordinate pair from the location provider.
#[derive(Debug, Clone)]
pub enum WeatherQuery {
    City(String),
    Coordinates(Coordinates),
}

/// Icon attached to a snapshot or forecast entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIcon {
    Sun,
    Cloud,
    Rain,
}

impl WeatherIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            WeatherIcon::Sun => "☀",
            WeatherIcon::Cloud => "☁",
            WeatherIcon::Rain => "🌧",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherIcon::Sun => "sun",
            WeatherIcon::Cloud => "cloud",
            WeatherIcon::Rain => "rain",
        }
    }
}

/// A single point-in-time reading for one city. Produced fresh per search;
/// carries no identity beyond its fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    /// Two-letter country code.
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub description: String,
    pub icon: WeatherIcon,
    pub humidity_pct: u8,
    pub wind_speed_kmh: f64,
    pub pressure_hpa: u32,
    pub visibility_km: f64,
    pub uv_index: u8,
}

/// One row of the multi-day projection. High is at least low by convention,
/// not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub label: String,
    pub icon: WeatherIcon,
    pub high_c: f64,
    pub low_c: f64,
}

/// Everything a provider returns for one query: the current reading plus a
/// five-day projection, today first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: WeatherSnapshot,
    pub forecast: Vec<ForecastDay>,
}
