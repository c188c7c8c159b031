//! Board colors

use macroquad::color::Color;
use super::Shade;

/// The five colors used to draw a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTheme {
    /// Clears the off-screen target
    pub clear: Color,
    /// Clears the window around the scaled target
    pub background: Color,
    pub light_cell: Color,
    pub dark_cell: Color,
    /// Fills the footprint under the cells
    pub padding: Color,
}

impl ColorTheme {
    pub fn cell(&self, shade: Shade) -> Color {
        match shade {
            Shade::Light => self.light_cell,
            Shade::Dark => self.dark_cell,
        }
    }
}
