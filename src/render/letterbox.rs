//! Destination rect for blitting the render target into the window

use macroquad::math::Rect;
use serde::{Deserialize, Serialize};

/// How the fixed-resolution render target maps onto the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StretchMode {
    /// Fill the whole window, ignoring the aspect ratio
    #[default]
    Stretch,
    /// Match the window width, derive height from the ratio
    ByWidth,
    /// Match the window height, derive width from the ratio
    ByHeight,
}

impl StretchMode {
    pub fn label(&self) -> &'static str {
        match self {
            StretchMode::Stretch => "stretch",
            StretchMode::ByWidth => "by width",
            StretchMode::ByHeight => "by height",
        }
    }
}

/// Compute where the render target lands inside a `screen_w` x `screen_h` window.
///
/// The rect is always anchored at the window origin. `ratio` is the target's
/// width / height and is ignored in `Stretch` mode.
pub fn render_target_rect(mode: StretchMode, screen_w: f32, screen_h: f32, ratio: f32) -> Rect {
    match mode {
        StretchMode::ByWidth => Rect::new(0.0, 0.0, screen_w, screen_w * ratio),
        StretchMode::ByHeight => Rect::new(0.0, 0.0, screen_h * ratio, screen_h),
        StretchMode::Stretch => Rect::new(0.0, 0.0, screen_w, screen_h),
    }
}
