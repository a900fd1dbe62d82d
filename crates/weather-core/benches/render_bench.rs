use anyhow::Result;
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use weather_core::{Clock, Dashboard, DashboardConfig, RenderOptions, Renderer};

fn bench_render(c: &mut Criterion) {
    let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let d = Dashboard::with_rng(DashboardConfig::default(), StdRng::seed_from_u64(1), Clock::Fixed(day));
    let renderer = Renderer::new();

    let mut group = c.benchmark_group("render_dashboard");
    for labels in [false, true] {
        group.bench_function(format!("rgba8_labels_{labels}"), |b| {
            let opts = RenderOptions { draw_labels: labels, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let frame = renderer.render_to_rgba8(&d, &opts)?;
                black_box(frame);
                Ok(())
            });
        });
    }
    group.bench_function("png_bytes", |b| {
        let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
        b.iter(|| -> Result<()> {
            black_box(renderer.render_to_png_bytes(&d, &opts)?);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
