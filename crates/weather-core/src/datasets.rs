// File: crates/weather-core/src/datasets.rs
// Summary: Fixed series shown by the Weekly Forecast and Historical Data cards.
// These are not derived from generated samples and do not change on refresh.

use crate::record::Condition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForecastDay {
    pub label: &'static str,
    pub condition: Condition,
    pub high: i32,
    pub low: i32,
}

pub const WEEKLY_FORECAST: [ForecastDay; 5] = [
    ForecastDay { label: "Today", condition: Condition::Sunny, high: 28, low: 19 },
    ForecastDay { label: "Tomorrow", condition: Condition::PartlyCloudy, high: 26, low: 20 },
    ForecastDay { label: "Wed", condition: Condition::LightRain, high: 21, low: 16 },
    ForecastDay { label: "Thu", condition: Condition::Sunny, high: 29, low: 22 },
    ForecastDay { label: "Fri", condition: Condition::PartlyCloudy, high: 24, low: 18 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthlyAverage {
    pub month: &'static str,
    pub temperature: i32,
}

/// Auckland monthly means, late summer into winter.
pub const HISTORICAL_MONTHS: [MonthlyAverage; 6] = [
    MonthlyAverage { month: "Feb", temperature: 24 },
    MonthlyAverage { month: "Mar", temperature: 22 },
    MonthlyAverage { month: "Apr", temperature: 19 },
    MonthlyAverage { month: "May", temperature: 16 },
    MonthlyAverage { month: "Jun", temperature: 14 },
    MonthlyAverage { month: "Jul", temperature: 13 },
];

pub fn historical_values() -> Vec<f64> {
    HISTORICAL_MONTHS.iter().map(|m| m.temperature as f64).collect()
}
