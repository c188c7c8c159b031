//! Application state and per-frame drawing
//!
//! Everything here is built once at startup; frames only read it.

use macroquad::logging::debug;
use macroquad::prelude::*;
use crate::board::{draw_board, Board, ColorTheme};
use crate::config::AppConfig;
use crate::render::{render_target_rect, OffscreenTarget, StretchMode};

pub struct AppState {
    pub board: Board,
    pub theme: ColorTheme,
    pub stretch_mode: StretchMode,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            board: config.board.layout(config.render_target.size()),
            theme: ColorTheme::from(&config.theme),
            stretch_mode: config.stretch_mode,
        }
    }
}

/// App state plus the off-screen target it draws into
pub struct App {
    pub state: AppState,
    target: OffscreenTarget,
}

impl App {
    /// Build state and acquire the render target. Needs a live window.
    pub fn new(config: &AppConfig) -> Self {
        let state = AppState::from_config(config);
        let target = OffscreenTarget::new(config.render_target.width, config.render_target.height);

        let footprint = state.board.footprint();
        debug!("Board size: {:.0}x{:.0} px", footprint.x, footprint.y);
        debug!(
            "Render target: {}x{} px, stretch mode: {}",
            target.width(),
            target.height(),
            state.stretch_mode.label()
        );

        Self { state, target }
    }

    /// Paint the board off-screen, then scale it into the window
    pub fn draw_frame(&self) {
        let state = &self.state;

        self.target.draw_into(|canvas| {
            clear_background(state.theme.clear);
            draw_board(canvas, &state.board, &state.theme);
        });

        clear_background(state.theme.background);
        let dest = render_target_rect(
            state.stretch_mode,
            screen_width(),
            screen_height(),
            self.target.aspect_ratio(),
        );
        self.target.blit(dest);
    }
}
