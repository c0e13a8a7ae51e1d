//! Pure formatters from weather values to text fragments. No state, no side
//! effects; each function takes only the fields it needs, so the three
//! fragments compose in any order.

use crate::model::{ForecastDay, WeatherSnapshot};

/// Headline block: temperature, condition, place, feels-like.
pub fn current_fragment(snapshot: &WeatherSnapshot) -> String {
    format!(
        "{temp:.0}°C  {glyph}  {description}\n{city}, {country}\nFeels like {feels:.0}°C\n",
        temp = snapshot.temperature_c,
        glyph = snapshot.icon.glyph(),
        description = snapshot.description,
        city = snapshot.city,
        country = snapshot.country,
        feels = snapshot.feels_like_c,
    )
}

/// One row per forecast day, in sequence order.
pub fn forecast_fragment(days: &[ForecastDay]) -> String {
    let mut out = String::new();
    for day in days {
        out.push_str(&format!(
            "{label:<9}  {glyph}  {high:>3.0}° / {low:.0}°\n",
            label = day.label,
            glyph = day.icon.glyph(),
            high = day.high_c,
            low = day.low_c,
        ));
    }
    out
}

/// Labeled rows for the details panel.
pub fn details_fragment(snapshot: &WeatherSnapshot) -> String {
    let rows = [
        ("Humidity", format!("{}%", snapshot.humidity_pct)),
        ("Wind Speed", format!("{:.0} km/h", snapshot.wind_speed_kmh)),
        ("Pressure", format!("{} hPa", snapshot.pressure_hpa)),
        ("Visibility", format!("{:.0} km", snapshot.visibility_km)),
        ("UV Index", snapshot.uv_index.to_string()),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{label:<11} {value}\n"));
    }
    out
}
