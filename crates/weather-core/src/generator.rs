// File: crates/weather-core/src/generator.rs
// Summary: Synthetic daily weather samples: bounded random perturbation around a baseline.

use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::DashboardConfig;
use crate::record::{Condition, WeatherRecord};

/// Offset added to the baseline temperature, in °C. Skewed warm on purpose.
pub const TEMP_OFFSET: RangeInclusive<i32> = -5..=8;
/// Relative humidity, in percent.
pub const HUMIDITY: RangeInclusive<u8> = 60..=90;

#[derive(Clone, Debug)]
pub struct SampleGenerator {
    pub city: String,
    pub baseline: i32,
    pub days: usize,
}

impl SampleGenerator {
    pub fn new(city: impl Into<String>, baseline: i32, days: usize) -> Self {
        Self { city: city.into(), baseline, days }
    }

    pub fn from_config(cfg: &DashboardConfig) -> Self {
        Self::new(cfg.city.clone(), cfg.baseline_temp, cfg.history_days)
    }

    /// One record per day counting back from `today`; index 0 is `today`.
    pub fn generate<R: Rng + ?Sized>(&self, today: NaiveDate, rng: &mut R) -> Vec<WeatherRecord> {
        (0..self.days)
            .map(|days_ago| {
                let date = today - Days::new(days_ago as u64);
                let temperature = self.baseline + rng.gen_range(TEMP_OFFSET);
                let humidity = rng.gen_range(HUMIDITY);
                let condition = pick_condition(rng);
                WeatherRecord::new(date, self.city.clone(), temperature, humidity, condition)
            })
            .collect()
    }
}

/// Weighted draw over `Condition::ALL` using `Condition::WEIGHTS`.
pub fn pick_condition<R: Rng + ?Sized>(rng: &mut R) -> Condition {
    let all: &[Condition] = &Condition::ALL;
    all.choose_weighted(rng, |c| c.weight())
        .copied()
        .unwrap_or(Condition::Sunny)
}
