use std::path::{Path, PathBuf};

use egui::Color32;

use crate::canvas::Canvas;
use crate::config::PaintConfig;
use crate::error::ExportError;
use crate::export::{ImageEncoder, with_png_extension};
use crate::history::SnapshotHistory;
use crate::input::InputEvent;
use crate::stroke::StrokeController;
use crate::tool::{ToolPreset, ToolState};

/// Everything a drawing session mutates, owned in one place.
///
/// The UI holds one of these and calls into it from its event handlers;
/// nothing here needs an egui context, so it can be driven headlessly.
#[derive(Debug)]
pub struct PaintState {
    canvas: Canvas,
    history: SnapshotHistory,
    tools: ToolState,
    stroke: StrokeController,
    /// Set whenever the canvas changes; cleared by the renderer
    dirty: bool,
}

impl Default for PaintState {
    fn default() -> Self {
        Self::new(&PaintConfig::default())
    }
}

impl PaintState {
    pub fn new(config: &PaintConfig) -> Self {
        Self {
            canvas: Canvas::new(config.canvas_width, config.canvas_height, config.background),
            history: SnapshotHistory::new(),
            tools: config.initial_tools,
            stroke: StrokeController::new(),
            dirty: true,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn stroke(&self) -> &StrokeController {
        &self.stroke
    }

    /// Feed a pointer event to the stroke controller. Returns true when the
    /// canvas needs repainting.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let changed = self
            .stroke
            .handle(event, &mut self.canvas, &mut self.history, &self.tools);
        self.dirty |= changed;
        changed
    }

    /// Apply the outcome of the colour picker. `None` means the user
    /// cancelled and nothing changes.
    pub fn pick_color(&mut self, picked: Option<Color32>) {
        if let Some(color) = picked {
            log::info!("Color set to {:?}", color);
            self.tools.set_color(color);
        }
    }

    pub fn set_brush_width(&mut self, width: u32) {
        self.tools.set_brush_width(width);
    }

    pub fn select_preset(&mut self, preset: ToolPreset) {
        log::info!("{} selected ({} px)", preset.name(), preset.width());
        self.tools.apply_preset(preset);
    }

    pub fn set_eraser_mode(&mut self, enabled: bool) {
        log::info!("Eraser {}", if enabled { "on" } else { "off" });
        self.tools.set_eraser_mode(enabled);
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo(&mut self.canvas);
        if changed {
            log::info!("Undo ({} left)", self.history.undo_len());
        }
        self.dirty |= changed;
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo(&mut self.canvas);
        if changed {
            log::info!("Redo ({} left)", self.history.redo_len());
        }
        self.dirty |= changed;
        changed
    }

    /// Paint the whole canvas with the background colour as one undo step.
    pub fn clear_canvas(&mut self) {
        self.history.begin_mutation(&self.canvas);
        self.canvas.fill(self.canvas.background());
        log::info!("Canvas cleared");
        self.dirty = true;
    }

    /// Write the canvas to `path`, appending `.png` if needed, and return
    /// the path actually written. Never touches the canvas or history.
    pub fn export_image(
        &self,
        path: &Path,
        encoder: &dyn ImageEncoder,
    ) -> Result<PathBuf, ExportError> {
        let path = with_png_extension(path);
        log::info!("Exporting canvas to {}", path.display());
        encoder.encode(&self.canvas, &path)?;
        Ok(path)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Take the dirty flag, leaving it cleared.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
