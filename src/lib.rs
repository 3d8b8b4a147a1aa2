#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod tool;

pub use app::PaintApp;
pub use canvas::{Canvas, PixelPos, Snapshot};
pub use config::PaintConfig;
pub use error::ExportError;
pub use export::{ImageEncoder, PngEncoder};
pub use history::SnapshotHistory;
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use state::PaintState;
pub use stroke::{StrokeController, StrokeState};
pub use tool::{ToolPreset, ToolState};
