mod canvas_panel;
mod color_dialog;
mod notice;
mod toolbar;

pub use canvas_panel::canvas_panel;
pub use color_dialog::{ColorDialog, ColorDialogOutcome};
pub use notice::Notice;
pub use toolbar::toolbar;
