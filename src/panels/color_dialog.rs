use egui::Color32;
use egui::color_picker::{Alpha, color_picker_color32};

/// What the colour dialog reported this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDialogOutcome {
    /// Not shown, or still waiting for the user
    Open,
    /// Dismissed; `None` if the user cancelled
    Closed(Option<Color32>),
}

/// Modal-ish window for choosing the paint colour.
#[derive(Debug, Default)]
pub struct ColorDialog {
    // Colour being edited while the window is open
    pending: Option<Color32>,
}

impl ColorDialog {
    pub fn open(&mut self, initial: Color32) {
        self.pending = Some(initial);
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn show(&mut self, ctx: &egui::Context) -> ColorDialogOutcome {
        let Some(color) = &mut self.pending else {
            return ColorDialogOutcome::Open;
        };

        let mut window_open = true;
        let mut outcome = ColorDialogOutcome::Open;
        egui::Window::new("Choose a Color")
            .collapsible(false)
            .resizable(false)
            .open(&mut window_open)
            .show(ctx, |ui| {
                color_picker_color32(ui, color, Alpha::Opaque);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        outcome = ColorDialogOutcome::Closed(Some(*color));
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = ColorDialogOutcome::Closed(None);
                    }
                });
            });

        if !window_open {
            outcome = ColorDialogOutcome::Closed(None);
        }
        if matches!(outcome, ColorDialogOutcome::Closed(_)) {
            self.pending = None;
        }
        outcome
    }
}
