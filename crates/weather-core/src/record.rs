// File: crates/weather-core/src/record.rs
// Summary: Daily weather record model and the fixed condition enumeration.
// Notes:
// - Records are immutable once built; the dashboard replaces the whole list on
//   refresh instead of editing entries in place.
// - Field order matches the export layout: date, city, temperature, humidity, condition.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Sunny")]
    Sunny,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    #[serde(rename = "Cloudy")]
    Cloudy,
    #[serde(rename = "Light Rain")]
    LightRain,
    #[serde(rename = "Overcast")]
    Overcast,
}

impl Condition {
    /// All conditions, most likely first.
    pub const ALL: [Condition; 5] = [
        Condition::Sunny,
        Condition::PartlyCloudy,
        Condition::Cloudy,
        Condition::LightRain,
        Condition::Overcast,
    ];

    /// Selection weights, index-aligned with `ALL`. Sum is 1.0.
    pub const WEIGHTS: [f64; 5] = [0.30, 0.25, 0.20, 0.15, 0.10];

    pub fn label(self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Cloudy => "Cloudy",
            Condition::LightRain => "Light Rain",
            Condition::Overcast => "Overcast",
        }
    }

    pub fn weight(self) -> f64 {
        let i = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::WEIGHTS[i]
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub date: NaiveDate,
    pub city: String,
    pub temperature: i32, // degrees Celsius
    pub humidity: u8,     // percent
    pub condition: Condition,
}

impl WeatherRecord {
    pub fn new(
        date: NaiveDate,
        city: impl Into<String>,
        temperature: i32,
        humidity: u8,
        condition: Condition,
    ) -> Self {
        Self { date, city: city.into(), temperature, humidity, condition }
    }
}
