//! Board module - checkerboard geometry and painting
//!
//! Layout is computed once at startup and read every frame:
//! - Cell rects are derived from origin, padding and cell size
//! - Shading follows (row + col) parity, light at the top-left cell

mod layout;
mod paint;
mod theme;

pub use layout::*;
pub use paint::*;
pub use theme::*;
