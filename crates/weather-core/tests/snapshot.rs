// File: crates/weather-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a seeded dashboard (fixed date, labels off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use weather_core::{Clock, Dashboard, DashboardConfig, RenderOptions, Renderer};

fn render_bytes() -> Vec<u8> {
    let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let d = Dashboard::with_rng(DashboardConfig::default(), StdRng::seed_from_u64(1234), Clock::Fixed(day));
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    Renderer::new().render_to_png_bytes(&d, &opts).expect("render bytes")
}

#[test]
fn golden_dashboard() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("dashboard.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        let img = image::load_from_memory(&bytes).expect("decode got");
        assert_eq!((img.width(), img.height()), (900, 700));
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
