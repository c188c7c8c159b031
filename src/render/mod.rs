//! Rendering plumbing
//!
//! - Letterbox math for mapping the off-screen target onto the window
//! - The `Canvas` seam the board painter draws through
//! - The off-screen render target itself

mod canvas;
mod letterbox;
mod target;

pub use canvas::*;
pub use letterbox::*;
pub use target::*;
