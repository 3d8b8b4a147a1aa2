use egui::Color32;

use crate::tool::ToolState;

/// Static settings for a drawing session.
///
/// There is no config file: the application runs with [`PaintConfig::default`],
/// while tests build smaller canvases through the public fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintConfig {
    /// Canvas width in pixels. Fixed for the lifetime of the canvas.
    pub canvas_width: usize,
    /// Canvas height in pixels. Fixed for the lifetime of the canvas.
    pub canvas_height: usize,
    /// Colour the canvas starts with, returns to on clear, and the eraser paints.
    pub background: Color32,
    /// Tool parameters in effect before the user touches the toolbar.
    pub initial_tools: ToolState,
}

impl PaintConfig {
    pub const DEFAULT_WIDTH: usize = 1920;
    pub const DEFAULT_HEIGHT: usize = 1080;

    /// Same defaults with a different canvas size.
    pub fn with_canvas_size(width: usize, height: usize) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            canvas_width: Self::DEFAULT_WIDTH,
            canvas_height: Self::DEFAULT_HEIGHT,
            background: Color32::WHITE,
            initial_tools: ToolState::default(),
        }
    }
}
