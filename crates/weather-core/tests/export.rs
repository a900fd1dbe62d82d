// File: crates/weather-core/tests/export.rs
// Purpose: Export file naming, JSON/CSV layout and re-parse round trip.

use std::io::{self, Write};
use std::path::Path;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use weather_core::export::{export_file_name, export_records, write_csv, write_records};
use weather_core::{Clock, Condition, Dashboard, DashboardConfig, ExportError, ExportFormat, NoticeLevel, WeatherRecord};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn dashboard(dir: &std::path::Path) -> Dashboard {
    let cfg = DashboardConfig { export_dir: dir.to_path_buf(), ..DashboardConfig::default() };
    Dashboard::with_rng(cfg, StdRng::seed_from_u64(11), Clock::Fixed(day()))
}

#[test]
fn file_name_is_date_stamped() {
    assert_eq!(export_file_name("auckland", day(), ExportFormat::Json), "auckland_weather_20250115.json");
    assert_eq!(export_file_name("auckland", day(), ExportFormat::Csv), "auckland_weather_20250115.csv");
}

#[test]
fn json_round_trip_matches_memory() {
    let tmp = tempfile::tempdir().unwrap();
    let mut d = dashboard(tmp.path());
    let path = d.export().expect("export");

    assert_eq!(path, tmp.path().join("auckland_weather_20250115.json"));
    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<WeatherRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.as_slice(), d.records());

    let n = d.notice().expect("notice posted");
    assert_eq!(n.level, NoticeLevel::Info);
    assert_eq!(n.title, "Export Complete");
    assert!(n.message.ends_with("auckland_weather_20250115.json"));
}

#[test]
fn json_layout_is_indented_objects() {
    let tmp = tempfile::tempdir().unwrap();
    let records = vec![WeatherRecord::new(day(), "Auckland, New Zealand", 24, 71, Condition::PartlyCloudy)];
    let path = export_records(&records, tmp.path(), "auckland", day(), ExportFormat::Json).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    let want = r#"[
  {
    "date": "2025-01-15",
    "city": "Auckland, New Zealand",
    "temperature": 24,
    "humidity": 71,
    "condition": "Partly Cloudy"
  }
]
"#;
    assert_eq!(text, want);
}

#[test]
fn csv_has_header_and_rows() {
    let records = vec![
        WeatherRecord::new(day(), "Auckland, New Zealand", 24, 71, Condition::LightRain),
        WeatherRecord::new(day().pred_opt().unwrap(), "Auckland, New Zealand", 19, 80, Condition::Sunny),
    ];
    let mut buf = Vec::new();
    write_csv(&records, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "date,city,temperature,humidity,condition");
    assert_eq!(lines[1], "2025-01-15,\"Auckland, New Zealand\",24,71,Light Rain");
    assert_eq!(lines[2], "2025-01-14,\"Auckland, New Zealand\",19,80,Sunny");
}

#[test]
fn csv_export_uses_csv_extension() {
    let tmp = tempfile::tempdir().unwrap();
    let mut d = dashboard(tmp.path());
    let path = d.export_as(ExportFormat::Csv).unwrap();
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));
    let rows = std::fs::read_to_string(path).unwrap().lines().count();
    assert_eq!(rows, 1 + d.records().len());
}

#[test]
fn failed_export_reports_and_keeps_state() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("no_such_dir");
    let mut d = dashboard(tmp.path());
    let before = d.records().to_vec();

    let err = d.export_to(&missing, ExportFormat::Json).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
    assert!(err.path().starts_with(&missing));

    assert_eq!(d.records(), before.as_slice());
    let n = d.notice().expect("error notice");
    assert_eq!(n.level, NoticeLevel::Error);
    assert_eq!(n.title, "Export Error");
    assert!(n.message.starts_with("Failed to export data:"));
}

/// Accepts `room` bytes, then fails like a full disk.
struct FullDisk {
    room: usize,
}

impl Write for FullDisk {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.room == 0 {
            return Err(io::Error::new(io::ErrorKind::Other, "no space left on device"));
        }
        let n = buf.len().min(self.room);
        self.room -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn writer_failures_are_io_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let d = dashboard(tmp.path());
    let target = Path::new("out/auckland_weather_20250115.json");
    for format in [ExportFormat::Json, ExportFormat::Csv] {
        let err = write_records(d.records(), format, FullDisk { room: 64 }, target).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }), "{format:?}: {err:?}");
        assert_eq!(err.path(), target);
    }
}

#[test]
fn export_leaves_only_the_final_file() {
    let tmp = tempfile::tempdir().unwrap();
    let mut d = dashboard(tmp.path());
    let path = d.export().unwrap();
    let names: Vec<_> = std::fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, [path.file_name().unwrap().to_owned()]);
}

#[test]
fn export_replaces_an_existing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("auckland_weather_20250115.json");
    std::fs::write(&target, "stale").unwrap();
    let mut d = dashboard(tmp.path());
    assert_eq!(d.export().unwrap(), target);
    let parsed: Vec<WeatherRecord> = serde_json::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(parsed.as_slice(), d.records());
}
