// File: crates/weather-core/src/scale.rs
// Summary: Chart layout calculator; maps short value series to line points and bar rectangles.
// Coordinates are local to the chart's drawing area (origin top-left, y grows down).

use crate::grid::linspace;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: f32,
    pub y: f32,
}

/// Drawing area of a line chart. Points are kept `margin` away from every edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineArea {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl LineArea {
    pub const fn new(width: f32, height: f32, margin: f32) -> Self {
        Self { width, height, margin }
    }
}

impl Default for LineArea {
    fn default() -> Self {
        Self::new(200.0, 80.0, 20.0)
    }
}

/// Vertical value scale mapping `[vmin, vmax]` to `[bottom_px, top_px]`.
/// A flat range uses a unit denominator, so every value lands on `top_px`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmax: f64,
    span: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f64, bottom_px: f64, vmin: f64, vmax: f64) -> Self {
        let span = if (vmax - vmin).abs() < 1e-12 { 1.0 } else { vmax - vmin };
        Self { top_px, bottom_px, vmax, span }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.top_px + (self.vmax - v) * (self.bottom_px - self.top_px) / self.span
    }
}

/// Smallest and largest value, or `None` for an empty slice.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut it = values.iter().copied();
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// One point per value: x evenly spaced over `[margin, width - margin]`,
/// y scaled over `[margin, height - margin]` with the series maximum on top.
/// A single value sits at `x = margin`; an empty slice yields no points.
pub fn line_points(values: &[f64], area: &LineArea) -> Vec<ChartPoint> {
    let Some((lo, hi)) = min_max(values) else { return Vec::new() };
    let m = area.margin as f64;
    let xs = linspace(m, area.width as f64 - m, values.len());
    let ys = ValueScale::new_linear(m, area.height as f64 - m, lo, hi);
    xs.into_iter()
        .zip(values)
        .map(|(x, &v)| ChartPoint { x: x as f32, y: ys.to_px(v) as f32 })
        .collect()
}

/// Fixed-stride bar chart geometry. Bars grow upward from `baseline_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    pub left: f32,
    pub stride: f32,
    pub bar_width: f32,
    pub baseline_y: f32,
    pub max_height: f32,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self { left: 20.0, stride: 35.0, bar_width: 25.0, baseline_y: 70.0, max_height: 60.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f32,
    /// Top edge; equals `baseline_y - height`.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BarRect {
    pub fn center_x(&self) -> f32 { self.x + self.width * 0.5 }
}

/// Bar heights proportional to the series maximum. A non-positive maximum
/// (or a negative value) gives zero-height bars rather than dividing by zero.
pub fn bar_rects(values: &[f64], layout: &BarLayout) -> Vec<BarRect> {
    let max = min_max(values).map(|(_, hi)| hi).unwrap_or(0.0);
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let height = if max > 0.0 {
                ((v / max).max(0.0) * layout.max_height as f64) as f32
            } else {
                0.0
            };
            BarRect {
                x: layout.left + i as f32 * layout.stride,
                y: layout.baseline_y - height,
                width: layout.bar_width,
                height,
            }
        })
        .collect()
}
