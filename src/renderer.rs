use egui::{Color32, Painter, Rect, TextureHandle, TextureOptions};

use crate::state::PaintState;

/// Keeps a GPU texture of the canvas in sync and paints it.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-upload the canvas if it changed since the last frame.
    pub fn sync(&mut self, ctx: &egui::Context, state: &mut PaintState) {
        let dirty = state.take_dirty();
        if let Some(texture) = &mut self.texture {
            if dirty {
                texture.set(state.canvas().to_color_image(), TextureOptions::NEAREST);
            }
            return;
        }

        log::debug!(
            "Allocating canvas texture {}x{}",
            state.canvas().width(),
            state.canvas().height()
        );
        self.texture = Some(ctx.load_texture(
            "canvas",
            state.canvas().to_color_image(),
            TextureOptions::NEAREST,
        ));
    }

    /// Draw the canvas texture into `rect`.
    pub fn render(&self, painter: &Painter, rect: Rect) {
        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
    }
}
