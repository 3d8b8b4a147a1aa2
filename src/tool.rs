use egui::{Color32, CursorIcon};

/// Width presets offered by the toolbar.
///
/// Pencil and brush are the same drawing operation at different widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolPreset {
    Pencil,
    Brush,
}

impl ToolPreset {
    pub fn width(self) -> u32 {
        match self {
            Self::Pencil => 2,
            Self::Brush => 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Brush => "Brush",
        }
    }
}

/// Paint parameters applied to every stroke sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    color: Color32,
    brush_width: u32,
    eraser: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            brush_width: 5,
            eraser: false,
        }
    }
}

impl ToolState {
    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn brush_width(&self) -> u32 {
        self.brush_width
    }

    pub fn is_eraser(&self) -> bool {
        self.eraser
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Widths below one pixel are raised to one.
    pub fn set_brush_width(&mut self, width: u32) {
        self.brush_width = width.max(1);
    }

    pub fn set_eraser_mode(&mut self, enabled: bool) {
        self.eraser = enabled;
    }

    /// Switch to a preset width. Leaves eraser mode.
    pub fn apply_preset(&mut self, preset: ToolPreset) {
        self.eraser = false;
        self.set_brush_width(preset.width());
    }

    /// Colour a stroke sample paints with. Erasing paints the background
    /// colour; there is no transparency.
    pub fn paint_color(&self, background: Color32) -> Color32 {
        if self.eraser { background } else { self.color }
    }

    /// Pointer shown over the canvas.
    pub fn cursor_icon(&self) -> CursorIcon {
        if self.eraser {
            CursorIcon::Crosshair
        } else {
            CursorIcon::Default
        }
    }
}
