//! Config data types
//!
//! Plain serde structs; converted into the runtime board/theme types at startup.

use macroquad::color::Color;
use macroquad::math::{uvec2, vec2, Vec2};
use serde::{Deserialize, Serialize};
use crate::board::{Board, ColorTheme, Padding};
use crate::render::StretchMode;
use super::ConfigError;

/// Everything read at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowSettings,
    pub render_target: RenderTargetSettings,
    pub stretch_mode: StretchMode,
    pub board: BoardSettings,
    pub theme: ThemeSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            render_target: RenderTargetSettings::default(),
            stretch_mode: StretchMode::ByHeight,
            board: BoardSettings::default(),
            theme: ThemeSettings::default(),
        }
    }
}

impl AppConfig {
    /// Reject values that would give a degenerate window, target or board.
    ///
    /// Zero cell counts are allowed and draw just the padding.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = &self.window;
        if window.width == 0 || window.height == 0 {
            return Err(ConfigError::Invalid(format!("window size {}x{}", window.width, window.height)));
        }
        if i32::try_from(window.width).is_err() || i32::try_from(window.height).is_err() {
            return Err(ConfigError::Invalid(format!("window size {}x{} too large", window.width, window.height)));
        }

        let target = &self.render_target;
        if target.width == 0 || target.height == 0 {
            return Err(ConfigError::Invalid(format!("render target size {}x{}", target.width, target.height)));
        }

        let (cell_w, cell_h) = self.board.cell_size;
        if !(cell_w.is_finite() && cell_h.is_finite() && cell_w > 0.0 && cell_h > 0.0) {
            return Err(ConfigError::Invalid(format!("cell size {}x{}", cell_w, cell_h)));
        }

        let p = &self.board.padding;
        for (side, px) in [("left", p.left), ("top", p.top), ("right", p.right), ("bottom", p.bottom)] {
            if !(px.is_finite() && px >= 0.0) {
                return Err(ConfigError::Invalid(format!("{} padding {}", side, px)));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "ChessIT".to_string(),
            width: 512,
            height: 512,
            resizable: true,
        }
    }
}

/// Native resolution of the off-screen buffer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderTargetSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderTargetSettings {
    fn default() -> Self {
        Self { width: 512, height: 512 }
    }
}

impl RenderTargetSettings {
    pub fn size(&self) -> Vec2 {
        vec2(self.width as f32, self.height as f32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingSettings {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for PaddingSettings {
    fn default() -> Self {
        Self { left: 2.0, top: 2.0, right: 2.0, bottom: 2.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// (columns, rows)
    pub cells: (u32, u32),
    /// (width, height) of one cell in pixels
    pub cell_size: (f32, f32),
    pub padding: PaddingSettings,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            cells: (8, 8),
            cell_size: (22.0, 22.0),
            padding: PaddingSettings::default(),
        }
    }
}

impl BoardSettings {
    /// Board centered in an area of `area` pixels
    pub fn layout(&self, area: Vec2) -> Board {
        let padding = Padding {
            left: self.padding.left,
            top: self.padding.top,
            right: self.padding.right,
            bottom: self.padding.bottom,
        };
        Board {
            position: Vec2::ZERO,
            size_in_cells: uvec2(self.cells.0, self.cells.1),
            cell_size: vec2(self.cell_size.0, self.cell_size.1),
            padding,
        }
        .centered_in(area)
    }
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Rgba {
    pub const WHITE: Rgba = Rgba { r: 255, g: 255, b: 255, a: 255 };
    pub const CHARCOAL: Rgba = Rgba { r: 39, g: 39, b: 39, a: 255 };
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::from_rgba(c.r, c.g, c.b, c.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub clear: Rgba,
    pub background: Rgba,
    pub light_cell: Rgba,
    pub dark_cell: Rgba,
    pub padding: Rgba,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            clear: Rgba::CHARCOAL,
            background: Rgba::CHARCOAL,
            light_cell: Rgba::WHITE,
            dark_cell: Rgba::CHARCOAL,
            padding: Rgba::WHITE,
        }
    }
}

impl From<&ThemeSettings> for ColorTheme {
    fn from(t: &ThemeSettings) -> Self {
        Self {
            clear: t.clear.into(),
            background: t.background.into(),
            light_cell: t.light_cell.into(),
            dark_cell: t.dark_cell.into(),
            padding: t.padding.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_layout_centered() {
        let config = AppConfig::default();
        let board = config.board.layout(config.render_target.size());
        assert_eq!(board.footprint(), vec2(180.0, 180.0));
        assert_eq!(board.position, vec2(166.0, 166.0));
    }

    #[test]
    fn test_default_window() {
        let window = WindowSettings::default();
        assert_eq!(window.title, "ChessIT");
        assert_eq!((window.width, window.height), (512, 512));
        assert!(window.resizable);
    }

    #[test]
    fn test_default_stretch_mode_by_height() {
        assert_eq!(AppConfig::default().stretch_mode, StretchMode::ByHeight);
    }

    fn rejects(config: AppConfig, needle: &str) {
        match config.validate() {
            Err(ConfigError::Invalid(reason)) => assert!(reason.contains(needle), "{}", reason),
            other => panic!("expected invalid config, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_window_dimension_rejected() {
        let mut config = AppConfig::default();
        config.window.width = 0;
        rejects(config, "window size");

        let mut config = AppConfig::default();
        config.window.height = 0;
        rejects(config, "window size");
    }

    #[test]
    fn test_oversized_window_rejected() {
        let mut config = AppConfig::default();
        config.window.width = i32::MAX as u32 + 1;
        rejects(config, "too large");
    }

    #[test]
    fn test_zero_render_target_dimension_rejected() {
        let mut config = AppConfig::default();
        config.render_target.height = 0;
        rejects(config, "render target");

        let mut config = AppConfig::default();
        config.render_target.width = 0;
        rejects(config, "render target");
    }

    #[test]
    fn test_non_positive_cell_size_rejected() {
        for size in [(0.0, 22.0), (22.0, 0.0), (-22.0, 22.0), (f32::NAN, 22.0), (22.0, f32::INFINITY)] {
            let mut config = AppConfig::default();
            config.board.cell_size = size;
            rejects(config, "cell size");
        }
    }

    #[test]
    fn test_negative_padding_rejected() {
        let mut config = AppConfig::default();
        config.board.padding.right = -1.0;
        rejects(config, "right padding");

        let mut config = AppConfig::default();
        config.board.padding.top = f32::NAN;
        rejects(config, "top padding");
    }

    #[test]
    fn test_zero_padding_and_empty_grid_allowed() {
        let mut config = AppConfig::default();
        config.board.padding = PaddingSettings { left: 0.0, top: 0.0, right: 0.0, bottom: 0.0 };
        config.board.cells = (0, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_theme_conversion() {
        let theme = ColorTheme::from(&ThemeSettings::default());
        assert_eq!(theme.light_cell, Color::from_rgba(255, 255, 255, 255));
        assert_eq!(theme.dark_cell, Color::from_rgba(39, 39, 39, 255));
        assert_eq!(theme.padding, theme.light_cell);
        assert_eq!(theme.clear, theme.background);
    }
}
