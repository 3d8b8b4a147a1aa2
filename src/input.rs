use egui::{Context, PointerButton, Pos2, Rect, Vec2};

use crate::canvas::PixelPos;

/// Pointer events the stroke controller understands, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { pos: PixelPos },
    /// Pointer moved, anywhere in the window
    PointerMove { pos: PixelPos },
    /// Primary button released, wherever the pointer is
    PointerUp,
}

/// Handles converting raw egui input into our domain-specific InputEvents
pub struct InputHandler {
    /// Where the canvas is drawn, in screen points
    canvas_rect: Rect,
    /// Canvas size in pixels
    canvas_size: Vec2,
}

impl InputHandler {
    pub fn new(canvas_width: usize, canvas_height: usize) -> Self {
        let canvas_size = Vec2::new(canvas_width as f32, canvas_height as f32);
        Self {
            canvas_rect: Rect::from_min_size(Pos2::ZERO, canvas_size),
            canvas_size,
        }
    }

    /// Update the on-screen canvas rectangle (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Map a screen position to the canvas pixel under it. Positions outside
    /// the canvas map to out-of-range pixels; drawing clips them.
    pub fn to_pixel(&self, pos: Pos2) -> PixelPos {
        let offset = pos - self.canvas_rect.min;
        let size = self.canvas_rect.size();
        let scale = Vec2::new(
            if size.x > 0.0 { self.canvas_size.x / size.x } else { 1.0 },
            if size.y > 0.0 { self.canvas_size.y / size.y } else { 1.0 },
        );
        PixelPos::new(
            (offset.x * scale.x).floor() as i32,
            (offset.y * scale.y).floor() as i32,
        )
    }

    /// Translate this frame's raw pointer events, in order.
    ///
    /// `canvas_hovered` tells whether the canvas, rather than a window
    /// floating above it, is under the pointer; presses elsewhere are ignored.
    pub fn process_input(&self, ctx: &Context, canvas_hovered: bool) -> Vec<InputEvent> {
        ctx.input(|input| {
            input
                .events
                .iter()
                .filter_map(|event| self.translate(event, canvas_hovered))
                .collect()
        })
    }

    fn translate(&self, event: &egui::Event, canvas_hovered: bool) -> Option<InputEvent> {
        match event {
            egui::Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } if canvas_hovered && self.canvas_rect.contains(*pos) => {
                Some(InputEvent::PointerDown { pos: self.to_pixel(*pos) })
            }
            egui::Event::PointerButton {
                button: PointerButton::Primary,
                pressed: false,
                ..
            } => Some(InputEvent::PointerUp),
            egui::Event::PointerMoved(pos) => Some(InputEvent::PointerMove {
                pos: self.to_pixel(*pos),
            }),
            // PointerGone included: leaving the window does not end a stroke
            _ => None,
        }
    }
}
