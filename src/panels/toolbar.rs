use crate::PaintApp;
use crate::tool::ToolPreset;

pub fn toolbar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Pick Color").clicked() {
                app.open_color_dialog();
            }
            if ui.button("Pencil").clicked() {
                app.state_mut().select_preset(ToolPreset::Pencil);
            }
            if ui.button("Brush").clicked() {
                app.state_mut().select_preset(ToolPreset::Brush);
            }

            let can_undo = app.state().history().can_undo();
            let can_redo = app.state().history().can_redo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.state_mut().undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                app.state_mut().redo();
            }

            if ui.button("Clear Canvas").clicked() {
                app.state_mut().clear_canvas();
            }
            if ui.button("Save Drawing").clicked() {
                app.save_drawing();
            }
            if ui.button("Eraser").clicked() {
                app.state_mut().set_eraser_mode(true);
            }

            ui.separator();

            // Current colour swatch
            let tools = *app.state().tools();
            let (rect, _) = ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, tools.color());
            ui.painter().rect_stroke(rect, 2.0, ui.visuals().widgets.noninteractive.bg_stroke);

            let mode = if tools.is_eraser() { "Eraser" } else { "Paint" };
            ui.label(format!("{mode} · {} px", tools.brush_width()));

            let history = app.state().history();
            ui.weak(format!("undo {} / redo {}", history.undo_len(), history.redo_len()));
        });
    });
}
