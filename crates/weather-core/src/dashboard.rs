// File: crates/weather-core/src/dashboard.rs
// Summary: Dashboard state and controller: owns the record list and exposes refresh/export.
// Notes:
// - Everything the window draws is read through accessors; only `refresh`,
//   `export*` and `dismiss_notice` change state.
// - The random source is a type parameter so tests can inject a seeded `StdRng`.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{DashboardConfig, ExportFormat};
use crate::export::{export_records, ExportError};
use crate::generator::SampleGenerator;
use crate::record::WeatherRecord;
use crate::stats::{trend, TemperatureStats, TrendPoint};

/// Days shown by the trend chart.
pub const TREND_DAYS: usize = 7;

/// Source of "today" for sample dates and export file names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clock {
    Local,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(self) -> NaiveDate {
        match self {
            Clock::Local => Local::now().date_naive(),
            Clock::Fixed(d) => d,
        }
    }
}

/// Rows of the current-weather details panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailField {
    Humidity,
    Wind,
    UvIndex,
    Pressure,
}

impl DetailField {
    pub const ALL: [DetailField; 4] =
        [DetailField::Humidity, DetailField::Wind, DetailField::UvIndex, DetailField::Pressure];

    pub fn label(self) -> &'static str {
        match self {
            DetailField::Humidity => "Humidity",
            DetailField::Wind => "Wind",
            DetailField::UvIndex => "UV Index",
            DetailField::Pressure => "Pressure",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Details {
    pub humidity: u8,
    pub wind_kmh: u32,
    pub uv_index: u8,
    pub pressure_hpa: u32,
}

impl Details {
    /// Humidity mirrors the latest record; the rest are re-rolled every time.
    pub fn roll<R: Rng + ?Sized>(humidity: u8, rng: &mut R) -> Self {
        Self {
            humidity,
            wind_kmh: rng.gen_range(5..=20),
            uv_index: rng.gen_range(6..=11), // summer
            pressure_hpa: (1013 + rng.gen_range(-15..=15)) as u32,
        }
    }

    pub fn display(&self, field: DetailField) -> String {
        match field {
            DetailField::Humidity => format!("{}%", self.humidity),
            DetailField::Wind => format!("{} km/h", self.wind_kmh),
            DetailField::UvIndex => self.uv_index.to_string(),
            DetailField::Pressure => format!("{} hPa", self.pressure_hpa),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Non-fatal message shown after a user action until dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, title: title.into(), message: message.into() }
    }
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, title: title.into(), message: message.into() }
    }
}

pub struct Dashboard<R: Rng = StdRng> {
    config: DashboardConfig,
    generator: SampleGenerator,
    rng: R,
    clock: Clock,
    records: Vec<WeatherRecord>,
    details: Details,
    stats: Option<TemperatureStats>,
    trend: Vec<TrendPoint>,
    notice: Option<Notice>,
}

impl Dashboard<StdRng> {
    /// Entropy-seeded samples dated from the local calendar.
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy(), Clock::Local)
    }
}

impl<R: Rng> Dashboard<R> {
    /// Generates the initial record list immediately; no notice is posted.
    pub fn with_rng(config: DashboardConfig, rng: R, clock: Clock) -> Self {
        let generator = SampleGenerator::from_config(&config);
        let mut d = Self {
            config,
            generator,
            rng,
            clock,
            records: Vec::new(),
            details: Details { humidity: 0, wind_kmh: 0, uv_index: 0, pressure_hpa: 0 },
            stats: None,
            trend: Vec::new(),
            notice: None,
        };
        d.regenerate();
        d
    }

    fn regenerate(&mut self) {
        let records = self.generator.generate(self.clock.today(), &mut self.rng);
        let humidity = records.first().map(|r| r.humidity).unwrap_or(0);
        self.details = Details::roll(humidity, &mut self.rng);
        self.stats = TemperatureStats::from_records(&records, self.details.wind_kmh);
        self.trend = trend(&records, TREND_DAYS);
        self.records = records;
    }

    /// Replace every record and derived view, then post a confirmation notice.
    pub fn refresh(&mut self) {
        self.regenerate();
        log::info!("refreshed {} samples for {}", self.records.len(), self.config.city);
        self.notice = Some(Notice::info(
            "Refresh Complete",
            format!("{} weather data updated", self.config.short_name),
        ));
    }

    /// Export to the configured directory and format.
    pub fn export(&mut self) -> Result<PathBuf, ExportError> {
        let dir = self.config.export_dir.clone();
        self.export_to(&dir, self.config.export_format)
    }

    pub fn export_as(&mut self, format: ExportFormat) -> Result<PathBuf, ExportError> {
        let dir = self.config.export_dir.clone();
        self.export_to(&dir, format)
    }

    /// Write the current records. Success and failure are both reported as a
    /// notice; the record list is left untouched either way.
    pub fn export_to(&mut self, dir: &Path, format: ExportFormat) -> Result<PathBuf, ExportError> {
        let day = self.clock.today();
        match export_records(&self.records, dir, &self.config.file_slug, day, format) {
            Ok(path) => {
                log::info!("exported {} records to {}", self.records.len(), path.display());
                let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
                self.notice = Some(Notice::info(
                    "Export Complete",
                    format!("{} weather data exported to {}", self.config.short_name, name),
                ));
                Ok(path)
            }
            Err(e) => {
                log::error!("export failed: {e}");
                self.notice = Some(Notice::error("Export Error", format!("Failed to export data: {e}")));
                Err(e)
            }
        }
    }

    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn config(&self) -> &DashboardConfig { &self.config }
    pub fn records(&self) -> &[WeatherRecord] { &self.records }
    /// Newest record (index 0).
    pub fn latest(&self) -> Option<&WeatherRecord> { self.records.first() }
    pub fn details(&self) -> &Details { &self.details }
    pub fn stats(&self) -> Option<&TemperatureStats> { self.stats.as_ref() }
    pub fn trend(&self) -> &[TrendPoint] { &self.trend }
    pub fn notice(&self) -> Option<&Notice> { self.notice.as_ref() }
    pub fn today(&self) -> NaiveDate { self.clock.today() }
}
