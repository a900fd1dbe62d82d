// File: crates/weather-core/tests/dashboard.rs
// Purpose: Controller behaviour: startup generation, refresh, details, notices.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use weather_core::{Clock, Dashboard, DashboardConfig, DetailField, NoticeLevel};

fn seeded(seed: u64) -> Dashboard {
    let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    Dashboard::with_rng(DashboardConfig::default(), StdRng::seed_from_u64(seed), Clock::Fixed(day))
}

#[test]
fn startup_generates_without_notice() {
    let d = seeded(3);
    assert_eq!(d.records().len(), 30);
    assert_eq!(d.latest().unwrap().date, d.today());
    assert!(d.notice().is_none());
    assert_eq!(d.trend().len(), 7);
    assert!(d.stats().is_some());
}

#[test]
fn refresh_replaces_everything() {
    let mut d = seeded(3);
    let before = d.records().to_vec();
    d.refresh();
    assert_eq!(d.records().len(), 30);
    assert_ne!(d.records(), before.as_slice());
    assert_eq!(d.latest().unwrap().date, d.today());

    let latest = d.latest().unwrap().temperature;
    assert_eq!(d.trend().last().unwrap().temperature, latest);

    let n = d.notice().unwrap();
    assert_eq!(n.level, NoticeLevel::Info);
    assert_eq!(n.title, "Refresh Complete");
    assert_eq!(n.message, "Auckland weather data updated");
}

#[test]
fn details_follow_latest_and_ranges() {
    let mut d = seeded(5);
    for _ in 0..50 {
        d.refresh();
        let det = *d.details();
        assert_eq!(det.humidity, d.latest().unwrap().humidity);
        assert!((5..=20).contains(&det.wind_kmh));
        assert!((6..=11).contains(&det.uv_index));
        assert!((998..=1028).contains(&det.pressure_hpa));
    }
}

#[test]
fn detail_fields_format() {
    let d = seeded(8);
    let det = d.details();
    assert_eq!(det.display(DetailField::Humidity), format!("{}%", det.humidity));
    assert!(det.display(DetailField::Wind).ends_with(" km/h"));
    assert!(det.display(DetailField::Pressure).ends_with(" hPa"));
    assert_eq!(det.display(DetailField::UvIndex), det.uv_index.to_string());
    let labels: Vec<_> = DetailField::ALL.iter().map(|f| f.label()).collect();
    assert_eq!(labels, ["Humidity", "Wind", "UV Index", "Pressure"]);
}

#[test]
fn dismiss_clears_notice() {
    let mut d = seeded(1);
    assert!(d.dismiss_notice().is_none());
    d.refresh();
    assert!(d.dismiss_notice().is_some());
    assert!(d.notice().is_none());
}

#[test]
fn seeded_dashboards_agree() {
    assert_eq!(seeded(21).records(), seeded(21).records());
}
