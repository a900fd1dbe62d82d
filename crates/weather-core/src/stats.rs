// File: crates/weather-core/src/stats.rs
// Summary: Temperature Stats card values and the 7-Day Trend view, derived from the record list.

use chrono::Datelike;

use crate::record::WeatherRecord;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperatureStats {
    pub average: f64,
    pub high: i32,
    pub low: i32,
    pub feels_like: i32,
}

impl TemperatureStats {
    /// `None` for an empty list. Feels-like is computed for the latest record.
    pub fn from_records(records: &[WeatherRecord], wind_kmh: u32) -> Option<Self> {
        let latest = records.first()?;
        let sum: i64 = records.iter().map(|r| r.temperature as i64).sum();
        let average = (sum as f64 / records.len() as f64 * 10.0).round() / 10.0;
        let high = records.iter().map(|r| r.temperature).max()?;
        let low = records.iter().map(|r| r.temperature).min()?;
        let feels_like =
            apparent_temperature(latest.temperature as f64, latest.humidity as f64, wind_kmh as f64 / 3.6)
                .round() as i32;
        Some(Self { average, high, low, feels_like })
    }
}

/// Steadman apparent temperature (non-radiative form), °C.
/// `humidity` in percent, `wind_ms` in metres per second at 10 m.
pub fn apparent_temperature(temp_c: f64, humidity: f64, wind_ms: f64) -> f64 {
    let vapour_hpa = humidity / 100.0 * 6.105 * (17.27 * temp_c / (237.7 + temp_c)).exp();
    temp_c + 0.33 * vapour_hpa - 0.70 * wind_ms - 4.00
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub temperature: i32,
}

/// The newest `days` records in chronological order, labelled by weekday.
pub fn trend(records: &[WeatherRecord], days: usize) -> Vec<TrendPoint> {
    records
        .iter()
        .take(days)
        .rev()
        .map(|r| TrendPoint { label: r.date.weekday().to_string(), temperature: r.temperature })
        .collect()
}
