// File: crates/weather-core/src/types.rs
// Summary: Shared window constants and padding type.

/// Default window width in pixels.
pub const WIDTH: i32 = 900;
/// Default window height in pixels.
pub const HEIGHT: i32 = 700;

/// Padding around a region, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(20)
    }
}
