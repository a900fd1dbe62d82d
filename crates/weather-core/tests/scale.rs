// File: crates/weather-core/tests/scale.rs
// Purpose: Line and bar layout math, including degenerate inputs.

use weather_core::scale::{min_max, ValueScale};
use weather_core::{bar_rects, line_points, BarLayout, LineArea};

#[test]
fn trend_sample_spans_margins() {
    let temps = [20.0, 23.0, 25.0, 24.0, 22.0, 26.0, 28.0];
    let area = LineArea::new(200.0, 80.0, 20.0);
    let pts = line_points(&temps, &area);

    assert_eq!(pts.len(), 7);
    assert_eq!(pts[0].x, 20.0);
    assert_eq!(pts[6].x, 180.0);
    // max (28) on top, min (20) on the bottom margin
    assert_eq!(pts[6].y, 20.0);
    assert_eq!(pts[0].y, 60.0);
    // evenly spaced
    let step = pts[1].x - pts[0].x;
    for w in pts.windows(2) {
        assert!((w[1].x - w[0].x - step).abs() < 1e-4);
    }
    // warmer is higher on screen
    assert!(pts[2].y < pts[1].y);
}

#[test]
fn flat_series_sits_on_top_margin() {
    let pts = line_points(&[20.0, 20.0, 20.0], &LineArea::default());
    assert_eq!(pts.len(), 3);
    assert!(pts.iter().all(|p| p.y == 20.0));
    assert!(pts.iter().all(|p| p.y.is_finite() && p.x.is_finite()));
}

#[test]
fn single_value_at_left_margin() {
    let pts = line_points(&[17.0], &LineArea::new(200.0, 80.0, 20.0));
    assert_eq!(pts.len(), 1);
    assert_eq!(pts[0].x, 20.0);
    assert_eq!(pts[0].y, 20.0);
}

#[test]
fn empty_series_has_no_points() {
    assert!(line_points(&[], &LineArea::default()).is_empty());
    assert!(bar_rects(&[], &BarLayout::default()).is_empty());
    assert_eq!(min_max(&[]), None);
}

#[test]
fn value_scale_inverts_axis() {
    let s = ValueScale::new_linear(20.0, 60.0, 10.0, 30.0);
    assert_eq!(s.to_px(30.0), 20.0);
    assert_eq!(s.to_px(10.0), 60.0);
    assert_eq!(s.to_px(20.0), 40.0);
}

#[test]
fn bars_are_proportional_to_max() {
    let layout = BarLayout::default();
    let bars = bar_rects(&[24.0, 22.0, 19.0, 16.0, 14.0, 13.0], &layout);

    assert_eq!(bars.len(), 6);
    assert_eq!(bars[0].height, 60.0);
    assert_eq!(bars[0].y, 10.0);
    assert_eq!(bars[0].x, 20.0);
    assert_eq!(bars[1].x, 55.0);
    assert_eq!(bars[5].x, 195.0);
    for b in &bars {
        assert_eq!(b.width, 25.0);
        assert!((b.y + b.height - layout.baseline_y).abs() < 1e-4, "anchored at baseline");
    }
    assert!((bars[3].height - 40.0).abs() < 1e-4); // 16/24 * 60
}

#[test]
fn non_positive_max_gives_flat_bars() {
    let bars = bar_rects(&[0.0, 0.0], &BarLayout::default());
    assert!(bars.iter().all(|b| b.height == 0.0 && b.y == 70.0));
    let bars = bar_rects(&[-3.0, -1.0], &BarLayout::default());
    assert!(bars.iter().all(|b| b.height == 0.0));
}
