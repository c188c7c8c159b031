//! Board painting

use crate::render::Canvas;
use super::{Board, ColorTheme};

/// Paint the padded footprint, then every cell on top of it
pub fn draw_board<C: Canvas>(canvas: &mut C, board: &Board, theme: &ColorTheme) {
    canvas.fill_rect(board.footprint_rect(), theme.padding);

    for cell in board.cells() {
        canvas.fill_rect(cell.rect, theme.cell(cell.shade));
    }
}
