use crate::StudioApp;
use crate::canvas::GARMENT_COLORS;
use crate::renderer::CanvasTransform;
use egui::{Sense, Stroke, vec2};

/// Central workspace: garment/zoom controls, the mockup canvas with drag
/// interaction, and the undo/redo footer.
pub fn canvas_panel(app: &mut StudioApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("canvas_footer").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Click to select, drag to move");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let can_undo = app.history().can_undo();
                let can_redo = app.history().can_redo();

                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
            });
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        workspace_header(app, ui);
        ui.separator();

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let transform = CanvasTransform::fit(response.rect, app.zoom.scale());

        // Route pointer events into the placement engine in canvas space.
        // A plain click is a press-release with no movement: it selects
        // without producing a history entry.
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                app.pointer_down(transform.to_canvas(pos));
                app.pointer_up();
            }
        }
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                app.pointer_down(transform.to_canvas(pos));
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                app.pointer_move(transform.to_canvas(pos));
            }
        }
        if response.drag_stopped() {
            app.pointer_up();
        }

        let garment = app.garment_color;
        app.renderer()
            .render(&painter, &transform, app.design(), garment);

        // Canvas size caption in the corner of the workspace.
        painter.text(
            response.rect.left_bottom() - vec2(-8.0, 8.0),
            egui::Align2::LEFT_BOTTOM,
            format!(
                "{} \u{d7} {} px \u{2022} {} element(s)",
                app.design().canvas().width,
                app.design().canvas().height,
                app.design().len()
            ),
            egui::FontId::proportional(12.0),
            ui.visuals().weak_text_color(),
        );
    });
}

fn workspace_header(app: &mut StudioApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label("T-shirt:");
        for (name, color) in GARMENT_COLORS {
            let selected = app.garment_color == color;
            let button = egui::Button::new("")
                .fill(color)
                .min_size(vec2(18.0, 18.0))
                .stroke(if selected {
                    Stroke::new(2.0, ui.visuals().selection.stroke.color)
                } else {
                    Stroke::new(1.0, ui.visuals().widgets.inactive.bg_stroke.color)
                });
            if ui.add(button).on_hover_text(name).clicked() {
                app.garment_color = color;
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Reset").clicked() {
                app.zoom.reset();
            }
            if ui.button("+").clicked() {
                app.zoom.zoom_in();
            }
            ui.label(format!("{}%", app.zoom.percent()));
            if ui.button("\u{2212}").clicked() {
                app.zoom.zoom_out();
            }
        });
    });
}
