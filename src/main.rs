#![warn(clippy::all, rust_2018_idioms)]
// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe_sketchpad::{PaintApp, PaintConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Simple Drawing Program")
            .with_inner_size([
                PaintConfig::DEFAULT_WIDTH as f32,
                PaintConfig::DEFAULT_HEIGHT as f32,
            ]),
        ..Default::default()
    };
    eframe::run_native(
        "Simple Drawing Program",
        native_options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc)))),
    )
}
