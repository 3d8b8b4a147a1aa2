use std::path::PathBuf;

/// Message shown after an export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved(PathBuf),
    Failed(String),
}

impl Notice {
    /// Show the notice. Returns false once the user dismisses it.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let (title, message) = match self {
            Self::Saved(path) => (
                "Success",
                format!("Image saved successfully at {}", path.display()),
            ),
            Self::Failed(reason) => ("Error", format!("Error saving image! {reason}")),
        };

        let mut open = true;
        let mut dismissed = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        open && !dismissed
    }
}
