use crate::PaintApp;

pub fn canvas_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(ctx.style().visuals.extreme_bg_color))
        .show(ctx, |ui| {
            let canvas = app.state().canvas();
            let size = egui::vec2(canvas.width() as f32, canvas.height() as f32);

            // Oversized canvases are clipped by the panel, not scaled
            let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
            let hovered = response.hovered();
            app.handle_canvas(ctx, &painter, response.rect, hovered);
        });
}
