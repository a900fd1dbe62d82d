// File: crates/weather-core/src/config.rs
// Summary: Compiled-in dashboard configuration (city, baseline, history length, export target).

use std::path::PathBuf;

/// Output encoding for `Dashboard::export`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

#[derive(Clone, Debug)]
pub struct DashboardConfig {
    /// Full city name stored in every record.
    pub city: String,
    /// Short name used in titles and notices ("Auckland").
    pub short_name: String,
    /// Lower-case prefix of export file names.
    pub file_slug: String,
    /// Reference temperature the samples are perturbed around, in °C.
    pub baseline_temp: i32,
    /// Number of daily records generated per refresh.
    pub history_days: usize,
    pub export_dir: PathBuf,
    pub export_format: ExportFormat,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            city: "Auckland, New Zealand".to_string(),
            short_name: "Auckland".to_string(),
            file_slug: "auckland".to_string(),
            baseline_temp: 22, // southern-hemisphere summer
            history_days: 30,
            export_dir: PathBuf::from("."),
            export_format: ExportFormat::Json,
        }
    }
}

impl DashboardConfig {
    pub fn title(&self) -> String {
        format!("{} Weather Analytics", self.short_name)
    }
}
