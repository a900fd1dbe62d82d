// File: crates/weather-core/src/theme.rs
// Summary: Dashboard colour palette (Apple system colours on a light background).

use skia_safe as skia;

use crate::dashboard::NoticeLevel;
use crate::record::Condition;

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub background: skia::Color,
    pub card: skia::Color,
    pub card_border: skia::Color,
    pub primary: skia::Color,
    pub secondary: skia::Color,
    pub text_primary: skia::Color,
    pub text_secondary: skia::Color,
    pub accent: skia::Color,
    pub warning: skia::Color,
    pub error: skia::Color,
    pub on_primary: skia::Color,
}

impl Palette {
    pub fn apple() -> Self {
        Self {
            background: skia::Color::from_rgb(0xf5, 0xf5, 0xf7),
            card: skia::Color::from_rgb(0xff, 0xff, 0xff),
            card_border: skia::Color::from_rgb(0xe5, 0xe5, 0xe7),
            primary: skia::Color::from_rgb(0x00, 0x7a, 0xff),   // blue
            secondary: skia::Color::from_rgb(0x58, 0x56, 0xd6), // indigo
            text_primary: skia::Color::from_rgb(0x1d, 0x1d, 0x1f),
            text_secondary: skia::Color::from_rgb(0x86, 0x86, 0x8b),
            accent: skia::Color::from_rgb(0x30, 0xd1, 0x58),    // green
            warning: skia::Color::from_rgb(0xff, 0x95, 0x00),   // orange
            error: skia::Color::from_rgb(0xff, 0x3b, 0x30),     // red
            on_primary: skia::Color::WHITE,
        }
    }

    /// Swatch used for a condition's icon in lists.
    pub fn condition(&self, c: Condition) -> skia::Color {
        match c {
            Condition::Sunny => self.warning,
            Condition::PartlyCloudy => skia::Color::from_rgb(0xff, 0xcc, 0x00),
            Condition::Cloudy => self.text_secondary,
            Condition::LightRain => self.primary,
            Condition::Overcast => skia::Color::from_rgb(0x63, 0x63, 0x66),
        }
    }

    pub fn notice(&self, level: NoticeLevel) -> skia::Color {
        match level {
            NoticeLevel::Info => self.primary,
            NoticeLevel::Error => self.error,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::apple()
    }
}
