use std::path::PathBuf;

use egui::{Key, KeyboardShortcut, Modifiers, Painter, Rect};

use crate::config::PaintConfig;
use crate::export::PngEncoder;
use crate::input::InputHandler;
use crate::panels::{self, ColorDialog, ColorDialogOutcome, Notice};
use crate::renderer::Renderer;
use crate::state::PaintState;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
const REDO_SHIFT: KeyboardShortcut = KeyboardShortcut::new(
    Modifiers {
        shift: true,
        ..Modifiers::COMMAND
    },
    Key::Z,
);

pub struct PaintApp {
    state: PaintState,
    renderer: Renderer,
    input: InputHandler,
    color_dialog: ColorDialog,
    // Result of the last export, shown until dismissed
    notice: Option<Notice>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(&PaintConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn with_config(config: &PaintConfig) -> Self {
        Self {
            state: PaintState::new(config),
            renderer: Renderer::new(),
            input: InputHandler::new(config.canvas_width, config.canvas_height),
            color_dialog: ColorDialog::default(),
            notice: None,
        }
    }

    pub fn state(&self) -> &PaintState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PaintState {
        &mut self.state
    }

    pub fn open_color_dialog(&mut self) {
        if self.color_dialog.is_open() {
            return;
        }
        self.color_dialog.open(self.state.tools().color());
    }

    /// Ask for a destination and export the canvas there.
    pub fn save_drawing(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Save Image")
            .add_filter("PNG Image", &["png"])
            .save_file()
        else {
            log::debug!("Save cancelled");
            return;
        };
        self.save_to(path);
    }

    fn save_to(&mut self, path: PathBuf) {
        let notice = match self.state.export_image(&path, &PngEncoder) {
            Ok(written) => {
                let shown = std::path::absolute(&written).unwrap_or(written);
                log::info!("Image saved at {}", shown.display());
                Notice::Saved(shown)
            }
            Err(err) => {
                log::error!("Error saving image: {err}");
                Notice::Failed(err.to_string())
            }
        };
        self.notice = Some(notice);
    }

    /// Route this frame's pointer input to the canvas and paint it.
    pub fn handle_canvas(
        &mut self,
        ctx: &egui::Context,
        painter: &Painter,
        rect: Rect,
        hovered: bool,
    ) {
        self.input.set_canvas_rect(rect);
        for event in self.input.process_input(ctx, hovered) {
            self.state.handle_input(event);
        }
        if hovered {
            ctx.set_cursor_icon(self.state.tools().cursor_icon());
        }
        self.renderer.sync(ctx, &mut self.state);
        self.renderer.render(painter, rect);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Shift+Z has to be consumed before plain Z or the undo shortcut swallows it
        let (undo, redo) = ctx.input_mut(|i| {
            let redo = i.consume_shortcut(&REDO_SHIFT) || i.consume_shortcut(&REDO);
            let undo = i.consume_shortcut(&UNDO);
            (undo, redo)
        });
        if undo {
            self.state.undo();
        }
        if redo {
            self.state.redo();
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        panels::toolbar(self, ctx);
        panels::canvas_panel(self, ctx);

        if let ColorDialogOutcome::Closed(picked) = self.color_dialog.show(ctx) {
            self.state.pick_color(picked);
        }

        if let Some(notice) = &self.notice {
            if !notice.show(ctx) {
                self.notice = None;
            }
        }
    }
}
