//! Board geometry

use macroquad::math::{vec2, Rect, UVec2, Vec2};

/// Padding around the cell grid, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    #[cfg(test)]
    pub const fn uniform(px: f32) -> Self {
        Self { left: px, top: px, right: px, bottom: px }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Which of the two cell colors a cell gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    /// Standard checkerboard: light where row + col is even
    pub fn at(row: u32, col: u32) -> Self {
        if (row + col) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }
}

/// One grid cell with its screen rect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub rect: Rect,
    pub shade: Shade,
}

/// Board placement and dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    /// Top-left corner of the padded footprint
    pub position: Vec2,
    /// Grid size in cells (x = columns, y = rows)
    pub size_in_cells: UVec2,
    pub cell_size: Vec2,
    pub padding: Padding,
}

impl Board {
    /// Size of the cell grid alone
    pub fn grid_size(&self) -> Vec2 {
        self.cell_size * self.size_in_cells.as_vec2()
    }

    /// Grid plus padding on all four sides
    pub fn footprint(&self) -> Vec2 {
        self.grid_size() + vec2(self.padding.horizontal(), self.padding.vertical())
    }

    pub fn footprint_rect(&self) -> Rect {
        let size = self.footprint();
        Rect::new(self.position.x, self.position.y, size.x, size.y)
    }

    /// Same board moved so its footprint is centered in `area`
    pub fn centered_in(self, area: Vec2) -> Self {
        Self {
            position: center_in(area, self.footprint()),
            ..self
        }
    }

    pub fn cell_rect(&self, row: u32, col: u32) -> Rect {
        let x = self.position.x + self.padding.left + col as f32 * self.cell_size.x;
        let y = self.position.y + self.padding.top + row as f32 * self.cell_size.y;
        Rect::new(x, y, self.cell_size.x, self.cell_size.y)
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let columns = self.size_in_cells.x;
        (0..self.size_in_cells.y).flat_map(move |row| {
            (0..columns).map(move |col| Cell {
                row,
                col,
                rect: self.cell_rect(row, col),
                shade: Shade::at(row, col),
            })
        })
    }
}

/// Top-left position that centers something of `size` inside `outer`
pub fn center_in(outer: Vec2, size: Vec2) -> Vec2 {
    outer / 2.0 - size / 2.0
}
