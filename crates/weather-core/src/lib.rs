// File: crates/weather-core/src/lib.rs
// Summary: Core library entry point; sample generation, chart layout, export and dashboard rendering.

pub mod config;
pub mod dashboard;
pub mod datasets;
pub mod export;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod record;
pub mod render;
pub mod scale;
pub mod stats;
pub mod text;
pub mod theme;
pub mod types;

pub use config::{DashboardConfig, ExportFormat};
pub use dashboard::{Clock, Dashboard, DetailField, Details, Notice, NoticeLevel};
pub use export::ExportError;
pub use generator::SampleGenerator;
pub use layout::{AnalyticsCard, Hit, ScreenLayout};
pub use record::{Condition, WeatherRecord};
pub use render::{RenderOptions, Renderer};
pub use scale::{bar_rects, line_points, BarLayout, BarRect, ChartPoint, LineArea};
pub use stats::TemperatureStats;
pub use theme::Palette;
