// File: crates/weather-core/src/render.rs
// Summary: Dashboard rendering pipeline using Skia CPU raster surfaces (RGBA buffer or PNG).

use anyhow::Result;
use rand::Rng;
use skia_safe as skia;

use crate::dashboard::{Dashboard, DetailField, Notice};
use crate::datasets::{historical_values, HISTORICAL_MONTHS, WEEKLY_FORECAST};
use crate::geometry::RectF;
use crate::layout::{AnalyticsCard, ScreenLayout, CARD_CONTENT_TOP};
use crate::scale::{bar_rects, line_points, BarLayout, LineArea};
use crate::text::{Align, TextShaper};
use crate::theme::Palette;
use crate::types::{Insets, HEIGHT, WIDTH};

const CARD_RADIUS: f32 = 12.0;
const CARD_PAD: f32 = 15.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub padding: Insets,
    pub palette: Palette,
    /// Text is skipped when false, which keeps pixel output font-independent.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: Insets::default(),
            palette: Palette::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::compute(self.width, self.height, self.padding)
    }
}

/// Holds the font collection so repeated frames don't rebuild it.
pub struct Renderer {
    text: TextShaper,
}

impl Renderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    /// Render one frame and return `(rgba8_unpremul, width, height, row_bytes)`.
    pub fn render_to_rgba8<R: Rng>(
        &self,
        dashboard: &Dashboard<R>,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(dashboard, opts)?;
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("failed to read back {w}x{h} surface");
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }

    pub fn render_to_png_bytes<R: Rng>(&self, dashboard: &Dashboard<R>, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(dashboard, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the dashboard to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png<R: Rng>(
        &self,
        dashboard: &Dashboard<R>,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(dashboard, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn render_surface<R: Rng>(&self, dashboard: &Dashboard<R>, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width.max(1), opts.height.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), dashboard, opts);
        Ok(surface)
    }

    /// Draw a full frame onto `canvas`.
    pub fn draw<R: Rng>(&self, canvas: &skia::Canvas, dashboard: &Dashboard<R>, opts: &RenderOptions) {
        let pal = &opts.palette;
        let lay = opts.layout();
        let ink = Ink { canvas, text: &self.text, labels: opts.draw_labels };

        canvas.clear(pal.background);

        // Header
        let cfg = dashboard.config();
        ink.label(&cfg.title(), lay.header.left, lay.header.top + 32.0, 28.0, pal.text_primary, true, Align::Left);
        let date = dashboard.today().format("%A, %B %d").to_string();
        ink.label(&date, lay.header.right, lay.header.top + 30.0, 14.0, pal.text_secondary, false, Align::Right);

        draw_current(&ink, dashboard, lay.current, pal);

        for which in AnalyticsCard::ALL {
            let rect = lay.card(which);
            fill_card(canvas, rect, pal);
            ink.label(which.title(), rect.left + CARD_PAD, rect.top + 30.0, 16.0, pal.text_primary, true, Align::Left);
            let origin = (rect.left + CARD_PAD, rect.top + CARD_CONTENT_TOP);
            // content never paints outside its own card
            canvas.save();
            canvas.clip_rect(rect.to_skia(), skia::ClipOp::Intersect, true);
            match which {
                AnalyticsCard::Trend => draw_trend(&ink, dashboard, origin, pal),
                AnalyticsCard::Stats => draw_stats(&ink, dashboard, rect, origin, pal),
                AnalyticsCard::Forecast => draw_forecast(&ink, rect, origin, pal),
                AnalyticsCard::Historical => draw_historical(&ink, origin, pal),
            }
            canvas.restore();
        }

        // Controls
        let mut paint = fill_paint(pal.primary);
        canvas.draw_round_rect(lay.refresh_button.to_skia(), 10.0, 10.0, &paint);
        ink.label("Refresh Data", lay.refresh_button.center_x(), lay.refresh_button.top + 28.0, 14.0, pal.on_primary, true, Align::Center);
        paint.set_color(pal.card);
        canvas.draw_round_rect(lay.export_button.to_skia(), 10.0, 10.0, &paint);
        canvas.draw_round_rect(lay.export_button.to_skia(), 10.0, 10.0, &stroke_paint(pal.primary, 1.0));
        ink.label("Export Data", lay.export_button.center_x(), lay.export_button.top + 28.0, 14.0, pal.primary, false, Align::Center);

        if let Some(notice) = dashboard.notice() {
            draw_notice(&ink, notice, lay.notice, opts);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

/// Canvas plus text shaper; text calls are no-ops when labels are off.
struct Ink<'a> {
    canvas: &'a skia::Canvas,
    text: &'a TextShaper,
    labels: bool,
}

impl Ink<'_> {
    #[allow(clippy::too_many_arguments)]
    fn label(&self, s: &str, x: f32, y: f32, size: f32, color: skia::Color, bold: bool, align: Align) {
        if self.labels {
            self.text.draw(self.canvas, s, x, y, size, color, bold, align);
        }
    }
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

fn fill_card(canvas: &skia::Canvas, rect: RectF, pal: &Palette) {
    canvas.draw_round_rect(rect.to_skia(), CARD_RADIUS, CARD_RADIUS, &fill_paint(pal.card));
    canvas.draw_round_rect(rect.to_skia(), CARD_RADIUS, CARD_RADIUS, &stroke_paint(pal.card_border, 1.0));
}

fn draw_current<R: Rng>(ink: &Ink, dashboard: &Dashboard<R>, rect: RectF, pal: &Palette) {
    fill_card(ink.canvas, rect, pal);
    let x = rect.left + 20.0;
    if let Some(latest) = dashboard.latest() {
        ink.label(&format!("{}°C", latest.temperature), x, rect.top + 68.0, 48.0, pal.text_primary, false, Align::Left);
        ink.label(latest.condition.label(), x, rect.top + 100.0, 18.0, pal.text_secondary, false, Align::Left);
    }
    ink.label(&dashboard.config().city, x, rect.top + 130.0, 16.0, pal.text_primary, true, Align::Left);

    let details = dashboard.details();
    let label_x = rect.right - 240.0;
    let value_x = rect.right - 20.0;
    for (i, field) in DetailField::ALL.into_iter().enumerate() {
        let y = rect.top + 45.0 + i as f32 * 26.0;
        ink.label(field.label(), label_x, y, 12.0, pal.text_secondary, false, Align::Left);
        ink.label(&details.display(field), value_x, y, 12.0, pal.text_primary, true, Align::Right);
    }
}

fn draw_trend<R: Rng>(ink: &Ink, dashboard: &Dashboard<R>, origin: (f32, f32), pal: &Palette) {
    let (ox, oy) = origin;
    let trend = dashboard.trend();
    let temps: Vec<f64> = trend.iter().map(|t| t.temperature as f64).collect();
    let area = LineArea::default();
    let points = line_points(&temps, &area);

    if points.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to((ox + points[0].x, oy + points[0].y));
        for p in points.iter().skip(1) {
            path.line_to((ox + p.x, oy + p.y));
        }
        ink.canvas.draw_path(&path, &stroke_paint(pal.primary, 2.0));
    }

    let dot = fill_paint(pal.primary);
    for (p, t) in points.iter().zip(trend) {
        let (x, y) = (ox + p.x, oy + p.y);
        ink.canvas.draw_circle((x, y), 3.0, &dot);
        ink.label(&t.label, x, oy + area.height + 18.0, 10.0, pal.text_secondary, false, Align::Center);
        ink.label(&format!("{}°", t.temperature), x, y - 10.0, 9.0, pal.text_primary, true, Align::Center);
    }
}

fn draw_stats<R: Rng>(ink: &Ink, dashboard: &Dashboard<R>, rect: RectF, origin: (f32, f32), pal: &Palette) {
    let Some(stats) = dashboard.stats() else { return };
    let rows = [
        ("Average", format!("{:.1}°C", stats.average), pal.primary),
        ("High", format!("{}°C", stats.high), pal.warning),
        ("Low", format!("{}°C", stats.low), pal.secondary),
        ("Feels Like", format!("{}°C", stats.feels_like), pal.accent),
    ];
    let (ox, oy) = origin;
    let right = rect.right - CARD_PAD;
    for (i, (label, value, color)) in rows.iter().enumerate() {
        let top = oy + i as f32 * 30.0;
        let bar = skia::Rect::from_xywh(ox, top, 4.0, 20.0);
        ink.canvas.draw_rect(bar, &fill_paint(*color));
        ink.label(label, ox + 14.0, top + 15.0, 12.0, pal.text_secondary, false, Align::Left);
        ink.label(value, right, top + 16.0, 16.0, pal.text_primary, true, Align::Right);
    }
}

fn draw_forecast(ink: &Ink, rect: RectF, origin: (f32, f32), pal: &Palette) {
    let (ox, oy) = origin;
    let right = rect.right - CARD_PAD;
    for (i, day) in WEEKLY_FORECAST.iter().enumerate() {
        let base = oy + 12.0 + i as f32 * 24.0;
        ink.label(day.label, ox, base, 11.0, pal.text_secondary, false, Align::Left);
        ink.canvas.draw_circle((ox + 86.0, base - 4.0), 6.0, &fill_paint(pal.condition(day.condition)));
        ink.label(day.condition.label(), ox + 100.0, base, 11.0, pal.text_secondary, false, Align::Left);
        ink.label(&format!("{}°/{}°C", day.high, day.low), right, base, 11.0, pal.text_primary, true, Align::Right);
    }
}

fn draw_historical(ink: &Ink, origin: (f32, f32), pal: &Palette) {
    let (ox, oy) = origin;
    let layout = BarLayout::default();
    let bars = bar_rects(&historical_values(), &layout);
    let fill = fill_paint(pal.secondary);
    for (bar, month) in bars.iter().zip(HISTORICAL_MONTHS.iter()) {
        let r = skia::Rect::from_xywh(ox + bar.x, oy + bar.y, bar.width, bar.height);
        ink.canvas.draw_rect(r, &fill);
        let cx = ox + bar.center_x();
        ink.label(month.month, cx, oy + layout.baseline_y + 14.0, 9.0, pal.text_secondary, false, Align::Center);
        ink.label(&format!("{}°C", month.temperature), cx, oy + bar.y - 4.0, 8.0, pal.text_primary, true, Align::Center);
    }
}

fn draw_notice(ink: &Ink, notice: &Notice, rect: RectF, opts: &RenderOptions) {
    let pal = &opts.palette;
    let scrim = skia::Rect::from_wh(opts.width as f32, opts.height as f32);
    ink.canvas.draw_rect(scrim, &fill_paint(skia::Color::from_argb(64, 0, 0, 0)));

    ink.canvas.draw_round_rect(rect.to_skia(), CARD_RADIUS, CARD_RADIUS, &fill_paint(pal.card));
    let stripe = skia::Rect::from_xywh(rect.left, rect.top + CARD_RADIUS, 5.0, rect.height() - 2.0 * CARD_RADIUS);
    ink.canvas.draw_rect(stripe, &fill_paint(pal.notice(notice.level)));

    let x = rect.left + 24.0;
    ink.label(&notice.title, x, rect.top + 34.0, 16.0, pal.text_primary, true, Align::Left);
    ink.label(&notice.message, x, rect.top + 62.0, 13.0, pal.text_primary, false, Align::Left);
    ink.label("Click or press Esc to dismiss", x, rect.bottom - 18.0, 11.0, pal.text_secondary, false, Align::Left);
}
