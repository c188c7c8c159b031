//! Fixed-resolution off-screen render target

use macroquad::prelude::*;
use super::canvas::ImmediateCanvas;

/// Off-screen buffer drawn at native resolution, then scaled to the window
pub struct OffscreenTarget {
    target: RenderTarget,
    camera: Camera2D,
    width: u32,
    height: u32,
}

impl OffscreenTarget {
    pub fn new(width: u32, height: u32) -> Self {
        let target = render_target(width, height);
        target.texture.set_filter(FilterMode::Nearest);

        // Camera space equals the target's pixel space
        let mut camera = Camera2D::from_display_rect(Rect::new(0.0, 0.0, width as f32, height as f32));
        camera.render_target = Some(target.clone());

        Self { target, camera, width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width / height of the native resolution
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Bind the target, run `paint` against it, then restore the default camera
    pub fn draw_into<F: FnOnce(&mut ImmediateCanvas)>(&self, paint: F) {
        set_camera(&self.camera);
        paint(&mut ImmediateCanvas);
        set_default_camera();
    }

    /// Draw the target's texture into `dest` on the currently bound (screen) camera
    pub fn blit(&self, dest: Rect) {
        draw_texture_ex(
            &self.target.texture,
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dest.w, dest.h)),
                // Render target textures are stored bottom-up
                flip_y: true,
                ..Default::default()
            },
        );
    }
}
