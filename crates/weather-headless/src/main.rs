// File: crates/weather-headless/src/main.rs
// Summary: Renders one dashboard frame to target/out and exports the samples as JSON and CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};
use weather_core::{Dashboard, DashboardConfig, ExportFormat, RenderOptions, Renderer};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let cfg = DashboardConfig { export_dir: out_dir.clone(), ..DashboardConfig::default() };
    let mut dashboard = Dashboard::new(cfg);
    let latest = dashboard.latest().context("no samples generated")?;
    info!(
        "latest: {} {}°C {}% {}",
        latest.date, latest.temperature, latest.humidity, latest.condition
    );
    if let Some(s) = dashboard.stats() {
        info!("avg {:.1}°C, high {}°C, low {}°C, feels like {}°C", s.average, s.high, s.low, s.feels_like);
    }

    let png = out_dir.join("dashboard.png");
    Renderer::new()
        .render_to_png(&dashboard, &RenderOptions::default(), &png)
        .with_context(|| format!("rendering {}", png.display()))?;
    println!("Wrote {}", png.display());

    for path in export_each(&mut dashboard, &[ExportFormat::Json, ExportFormat::Csv]) {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Export once per format. A failed export is reported and skipped; the
/// remaining formats are still attempted.
fn export_each(dashboard: &mut Dashboard, formats: &[ExportFormat]) -> Vec<PathBuf> {
    formats
        .iter()
        .filter_map(|&format| match dashboard.export_as(format) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("{format:?} export skipped: {e}");
                if let Some(n) = dashboard.notice() {
                    eprintln!("{}: {}", n.title, n.message);
                }
                None
            }
        })
        .collect()
}
