pub mod canvas_panel;
pub mod export_panel;
pub mod properties_panel;
pub mod tools_panel;

pub use canvas_panel::canvas_panel;
pub use export_panel::export_window;
pub use properties_panel::properties_panel;
pub use tools_panel::tools_panel;

use crate::StudioApp;
use crate::compliance;
use crate::export::JobStatus;

pub fn editor_header(app: &mut StudioApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("editor_header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Tee Studio");
            ui.separator();
            ui.label(format!("{} element(s)", app.design().len()));

            let score = compliance::evaluate(app.design()).score;
            ui.separator();
            ui.label(format!("Compliance: {score}/100"));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Export…").clicked() {
                    app.show_export_panel = true;
                }

                let save_status = app.export_service_mut().save_status();
                match save_status {
                    JobStatus::Idle => {
                        if ui.button("Save").clicked() {
                            app.export_service_mut().start_save();
                        }
                    }
                    JobStatus::InProgress => {
                        ui.spinner();
                        ui.label("Saving…");
                        ctx.request_repaint_after(std::time::Duration::from_millis(100));
                    }
                    JobStatus::Completed => {
                        if ui.button("Saved ✔").clicked() {
                            app.export_service_mut().acknowledge_save();
                        }
                    }
                }
            });
        });
    });
}
