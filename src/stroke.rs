use crate::canvas::{Canvas, PixelPos};
use crate::history::SnapshotHistory;
use crate::input::InputEvent;
use crate::tool::ToolState;

/// Drag state of the stroke controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    /// No button held over the canvas
    #[default]
    Idle,
    /// Drawing; `last` is the previous pointer sample
    Armed { last: PixelPos },
}

/// Turns pointer drags into line segments on the canvas.
///
/// ```text
/// Idle --PointerDown--> Armed(p) --PointerMove(q)--> Armed(q)  (draws p..q)
///   ^                      |
///   +-------PointerUp------+
/// ```
#[derive(Debug, Default)]
pub struct StrokeController {
    state: StrokeState,
}

impl StrokeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, StrokeState::Armed { .. })
    }

    /// Feed one pointer event. Returns true when the canvas changed and
    /// needs repainting.
    pub fn handle(
        &mut self,
        event: InputEvent,
        canvas: &mut Canvas,
        history: &mut SnapshotHistory,
        tools: &ToolState,
    ) -> bool {
        match (self.state, event) {
            (_, InputEvent::PointerDown { pos }) => {
                history.begin_mutation(canvas);
                log::debug!("Stroke started at {:?}", pos);
                self.state = StrokeState::Armed { last: pos };
                false
            }
            (StrokeState::Armed { last }, InputEvent::PointerMove { pos }) => {
                let color = tools.paint_color(canvas.background());
                canvas.draw_line(last, pos, color, tools.brush_width());
                self.state = StrokeState::Armed { last: pos };
                true
            }
            (StrokeState::Idle, InputEvent::PointerMove { .. }) => false,
            (state, InputEvent::PointerUp) => {
                if let StrokeState::Armed { last } = state {
                    log::debug!("Stroke ended at {:?}", last);
                }
                self.state = StrokeState::Idle;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    fn setup() -> (StrokeController, Canvas, SnapshotHistory, ToolState) {
        (
            StrokeController::new(),
            Canvas::new(20, 20, Color32::WHITE),
            SnapshotHistory::new(),
            ToolState::default(),
        )
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let (mut stroke, mut canvas, mut history, tools) = setup();
        let before = canvas.snapshot();
        let repaint = stroke.handle(
            InputEvent::PointerMove { pos: PixelPos::new(5, 5) },
            &mut canvas,
            &mut history,
            &tools,
        );
        assert!(!repaint);
        assert_eq!(canvas.snapshot(), before);
        assert!(!history.can_undo());
    }

    #[test]
    fn transitions() {
        let (mut stroke, mut canvas, mut history, tools) = setup();
        let down = InputEvent::PointerDown { pos: PixelPos::new(1, 1) };
        stroke.handle(down, &mut canvas, &mut history, &tools);
        assert_eq!(stroke.state(), StrokeState::Armed { last: PixelPos::new(1, 1) });

        let drag = InputEvent::PointerMove { pos: PixelPos::new(4, 1) };
        assert!(stroke.handle(drag, &mut canvas, &mut history, &tools));
        assert_eq!(stroke.state(), StrokeState::Armed { last: PixelPos::new(4, 1) });

        stroke.handle(InputEvent::PointerUp, &mut canvas, &mut history, &tools);
        assert_eq!(stroke.state(), StrokeState::Idle);

        // Releasing twice is harmless
        stroke.handle(InputEvent::PointerUp, &mut canvas, &mut history, &tools);
        assert_eq!(stroke.state(), StrokeState::Idle);
        assert_eq!(history.undo_len(), 1);
    }
}
