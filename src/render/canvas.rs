//! Draw target abstraction
//!
//! Board painting only needs solid rectangles. Going through a trait keeps the
//! painter independent of whichever camera or target macroquad has bound.

use macroquad::prelude::*;

/// Something that solid rectangles can be filled into
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// Draws into whatever macroquad currently has bound (screen or render target)
pub struct ImmediateCanvas;

impl Canvas for ImmediateCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }
}

/// Records every fill in order, for asserting on what a painter produced
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub fills: Vec<(Rect, Color)>,
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fills.push((rect, color));
    }
}
