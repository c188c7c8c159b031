//! ChessIT: checkerboard renderer
//!
//! Paints the board into a fixed-resolution off-screen render target every
//! frame, then scales that target into the window according to the
//! configured stretch mode.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod board;
mod config;
mod render;

use app::App;
use macroquad::logging::info;
use macroquad::prelude::*;

fn window_conf() -> Conf {
    let window = &config::current().window;
    let defaults = Conf::default();
    Conf {
        window_title: window.title.clone(),
        window_width: i32::try_from(window.width).unwrap_or(defaults.window_width),
        window_height: i32::try_from(window.height).unwrap_or(defaults.window_height),
        window_resizable: window.resizable,
        ..defaults
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    info!("=== ChessIT v{} ===", VERSION);

    // Render target is acquired once and reused by every frame
    let app = App::new(config::current());

    loop {
        app.draw_frame();
        next_frame().await;
    }
}
