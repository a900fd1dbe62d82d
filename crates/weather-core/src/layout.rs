// File: crates/weather-core/src/layout.rs
// Summary: Screen layout of the dashboard (header, cards, buttons, notice) and button hit-testing.

use crate::geometry::RectF;
use crate::types::Insets;

pub const HEADER_HEIGHT: f32 = 44.0;
pub const CURRENT_HEIGHT: f32 = 150.0;
pub const CONTROLS_HEIGHT: f32 = 44.0;
pub const GAP: f32 = 15.0;
pub const BUTTON_WIDTH: f32 = 170.0;
pub const NOTICE_SIZE: (f32, f32) = (440.0, 120.0);
/// Offset from a card's top edge to its content area (below the title).
pub const CARD_CONTENT_TOP: f32 = 45.0;
/// Tallest card content: four 30 px stats rows under the title, plus bottom padding.
pub const CARD_MIN_HEIGHT: f32 = CARD_CONTENT_TOP + 4.0 * 30.0 + 10.0;
/// Widest card content: the forecast rows.
pub const CARD_MIN_WIDTH: f32 = 280.0;

/// The four cards of the analytics grid, in reading order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalyticsCard {
    Trend,
    Stats,
    Forecast,
    Historical,
}

impl AnalyticsCard {
    pub const ALL: [AnalyticsCard; 4] =
        [AnalyticsCard::Trend, AnalyticsCard::Stats, AnalyticsCard::Forecast, AnalyticsCard::Historical];

    pub fn title(self) -> &'static str {
        match self {
            AnalyticsCard::Trend => "7-Day Trend",
            AnalyticsCard::Stats => "Temperature Stats",
            AnalyticsCard::Forecast => "Weekly Forecast",
            AnalyticsCard::Historical => "Historical Data",
        }
    }

    fn index(self) -> usize {
        match self {
            AnalyticsCard::Trend => 0,
            AnalyticsCard::Stats => 1,
            AnalyticsCard::Forecast => 2,
            AnalyticsCard::Historical => 3,
        }
    }
}

/// What a pointer position lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    Refresh,
    Export,
    Notice,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenLayout {
    pub header: RectF,
    pub current: RectF,
    cards: [RectF; 4],
    pub refresh_button: RectF,
    pub export_button: RectF,
    pub notice: RectF,
}

impl ScreenLayout {
    /// Lay out a `width` x `height` surface. Regions shrink (never invert)
    /// when the surface is smaller than the 900x700 design size.
    pub fn compute(width: i32, height: i32, padding: Insets) -> Self {
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        let l = padding.left as f32;
        let r = (w - padding.right as f32).max(l);
        let t = padding.top as f32;
        let b = (h - padding.bottom as f32).max(t);

        let header = RectF::from_ltrb(l, t, r, (t + HEADER_HEIGHT).min(b));
        let cur_top = (header.bottom + 10.0).min(b);
        let current = RectF::from_ltrb(l, cur_top, r, (cur_top + CURRENT_HEIGHT).min(b));

        let ctrl_top = (b - CONTROLS_HEIGHT).max(current.bottom);
        let grid_top = (current.bottom + GAP).min(ctrl_top);
        let grid_bottom = (ctrl_top - 20.0).max(grid_top);
        let col_w = ((r - l - GAP) * 0.5).max(0.0);
        let row_h = ((grid_bottom - grid_top - GAP) * 0.5).max(0.0);
        let cards = [0usize, 1, 2, 3].map(|i| {
            let col = (i % 2) as f32;
            let row = (i / 2) as f32;
            RectF::from_ltwh(l + col * (col_w + GAP), grid_top + row * (row_h + GAP), col_w, row_h)
        });

        let mid = (l + r) * 0.5;
        let refresh_button =
            RectF::from_ltrb(mid - 5.0 - BUTTON_WIDTH, ctrl_top, mid - 5.0, ctrl_top + CONTROLS_HEIGHT);
        let export_button =
            RectF::from_ltrb(mid + 5.0, ctrl_top, mid + 5.0 + BUTTON_WIDTH, ctrl_top + CONTROLS_HEIGHT);

        let (nw, nh) = NOTICE_SIZE;
        let notice = RectF::from_ltwh(mid - nw * 0.5, (h - nh) * 0.5, nw, nh);

        Self { header, current, cards, refresh_button, export_button, notice }
    }

    /// Smallest surface, in pixels, at which every analytics card is at least
    /// `CARD_MIN_WIDTH` x `CARD_MIN_HEIGHT`.
    pub fn min_size(padding: Insets) -> (i32, i32) {
        let w = padding.left as f32 + 2.0 * CARD_MIN_WIDTH + GAP + padding.right as f32;
        let h = padding.top as f32
            + HEADER_HEIGHT
            + 10.0
            + CURRENT_HEIGHT
            + GAP
            + 2.0 * CARD_MIN_HEIGHT
            + GAP
            + 20.0
            + CONTROLS_HEIGHT
            + padding.bottom as f32;
        (w.ceil() as i32, h.ceil() as i32)
    }

    pub fn card(&self, which: AnalyticsCard) -> RectF {
        self.cards[which.index()]
    }

    /// Buttons are only reachable when no notice is showing; the notice is modal.
    pub fn hit_test(&self, x: f32, y: f32, notice_visible: bool) -> Option<Hit> {
        if notice_visible {
            return self.notice.contains(x, y).then_some(Hit::Notice);
        }
        if self.refresh_button.contains(x, y) {
            Some(Hit::Refresh)
        } else if self.export_button.contains(x, y) {
            Some(Hit::Export)
        } else {
            None
        }
    }
}
