use crate::StudioApp;
use crate::compliance;
use crate::export::{Dpi, EXPORT_PIXEL_SIZE, ExportFormat, JobStatus};

/// Modal-style window driving the mock export flow.
pub fn export_window(app: &mut StudioApp, ctx: &egui::Context) {
    let mut open = app.show_export_panel;

    egui::Window::new("Export design")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            let status = app.export_service_mut().export_status();
            let busy = status == JobStatus::InProgress;

            ui.add_enabled_ui(!busy, |ui| {
                ui.label("Format");
                egui::ComboBox::from_id_salt("export_format")
                    .selected_text(app.export_settings.format.description())
                    .show_ui(ui, |ui| {
                        for format in ExportFormat::ALL {
                            ui.selectable_value(
                                &mut app.export_settings.format,
                                format,
                                format.description(),
                            );
                        }
                    });

                ui.label("Resolution");
                egui::ComboBox::from_id_salt("export_dpi")
                    .selected_text(format!("{} DPI", app.export_settings.dpi.value()))
                    .show_ui(ui, |ui| {
                        for dpi in Dpi::ALL {
                            ui.selectable_value(
                                &mut app.export_settings.dpi,
                                dpi,
                                format!("{} DPI", dpi.value()),
                            );
                        }
                    });
            });

            ui.separator();
            let (w, h) = EXPORT_PIXEL_SIZE;
            ui.small(format!("File: {}", app.export_settings.file_name()));
            ui.small(format!("Dimensions: {w} \u{d7} {h} px"));

            let report = compliance::evaluate(app.design());
            if report.passed() {
                ui.small(format!("Compliance: {}/100", report.score));
            } else {
                ui.colored_label(
                    egui::Color32::from_rgb(0xDC, 0x26, 0x26),
                    "Design fails compliance checks",
                );
            }

            ui.separator();
            match status {
                JobStatus::Idle => {
                    if ui.button("Start export").clicked() {
                        let settings = app.export_settings;
                        app.export_service_mut().start_export(settings);
                    }
                }
                JobStatus::InProgress => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Exporting\u{2026}");
                    });
                    ctx.request_repaint_after(std::time::Duration::from_millis(100));
                }
                JobStatus::Completed => {
                    ui.label("Export complete.");
                    if ui.button("Done").clicked() {
                        app.export_service_mut().acknowledge_export();
                        app.show_export_panel = false;
                    }
                }
            }
        });

    // The window's own close button.
    if !open {
        app.show_export_panel = false;
    }
}
