use crate::StudioApp;
use crate::element::ShapeKind;
use egui::{Color32, Stroke, vec2};

/// Tool categories shown in the left panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolCategory {
    #[default]
    Text,
    Shapes,
    Images,
    Colors,
}

impl ToolCategory {
    const ALL: [ToolCategory; 4] = [
        ToolCategory::Text,
        ToolCategory::Shapes,
        ToolCategory::Images,
        ToolCategory::Colors,
    ];

    fn name(&self) -> &'static str {
        match self {
            ToolCategory::Text => "Text",
            ToolCategory::Shapes => "Shapes",
            ToolCategory::Images => "Images",
            ToolCategory::Colors => "Colors",
        }
    }
}

const COLOR_PALETTES: [(&str, [Color32; 6]); 4] = [
    ("Primary", [
        Color32::BLACK,
        Color32::WHITE,
        Color32::from_rgb(0xFF, 0x00, 0x00),
        Color32::from_rgb(0x00, 0xFF, 0x00),
        Color32::from_rgb(0x00, 0x00, 0xFF),
        Color32::from_rgb(0xFF, 0xFF, 0x00),
    ]),
    ("Warm", [
        Color32::from_rgb(0xFF, 0x6B, 0x35),
        Color32::from_rgb(0xF7, 0x93, 0x1E),
        Color32::from_rgb(0xFF, 0xD2, 0x3F),
        Color32::from_rgb(0xEE, 0x4B, 0x2B),
        Color32::from_rgb(0xC2, 0x18, 0x07),
        Color32::from_rgb(0x8B, 0x00, 0x00),
    ]),
    ("Cool", [
        Color32::from_rgb(0x4A, 0x90, 0xE2),
        Color32::from_rgb(0x50, 0xC8, 0x78),
        Color32::from_rgb(0x40, 0xE0, 0xD0),
        Color32::from_rgb(0x64, 0x95, 0xED),
        Color32::from_rgb(0x00, 0xCE, 0xD1),
        Color32::from_rgb(0x41, 0x69, 0xE1),
    ]),
    ("Pastel", [
        Color32::from_rgb(0xFF, 0xB6, 0xC1),
        Color32::from_rgb(0x98, 0xFB, 0x98),
        Color32::from_rgb(0x87, 0xCE, 0xEB),
        Color32::from_rgb(0xDD, 0xA0, 0xDD),
        Color32::from_rgb(0xF0, 0xE6, 0x8C),
        Color32::from_rgb(0xFF, 0xA0, 0x7A),
    ]),
];

pub fn tools_panel(app: &mut StudioApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            ui.horizontal_wrapped(|ui| {
                for category in ToolCategory::ALL {
                    let selected = app.active_tool == category;
                    if ui.selectable_label(selected, category.name()).clicked() {
                        app.active_tool = category;
                    }
                }
            });
            ui.separator();

            match app.active_tool {
                ToolCategory::Text => text_tools(app, ui),
                ToolCategory::Shapes => shape_tools(app, ui),
                ToolCategory::Images => image_tools(app, ui),
                ToolCategory::Colors => color_tools(app, ui),
            }
        });
}

fn text_tools(app: &mut StudioApp, ui: &mut egui::Ui) {
    if ui.button("\u{2795} Add text").clicked() {
        app.add_text();
    }
    ui.small("New text is added at a random spot on the canvas; style it from the properties panel.");
}

fn shape_tools(app: &mut StudioApp, ui: &mut egui::Ui) {
    egui::Grid::new("shape_buttons").num_columns(2).show(ui, |ui| {
        for (i, kind) in ShapeKind::ALL.into_iter().enumerate() {
            if ui.button(kind.as_str()).clicked() {
                app.add_shape(kind);
            }
            if i % 2 == 1 {
                ui.end_row();
            }
        }
    });
}

fn image_tools(app: &mut StudioApp, ui: &mut egui::Ui) {
    ui.label("Drop a PNG, JPEG or GIF anywhere in the window.");
    ui.small("Up to 10 MB. Files are validated by content, not extension.");
    ui.separator();

    if app.uploads.notices().is_empty() {
        ui.weak("No uploads yet.");
    } else {
        for notice in app.uploads.notices() {
            ui.label(notice);
        }
        if ui.button("Clear").clicked() {
            app.uploads.clear();
        }
    }
}

fn color_tools(app: &mut StudioApp, ui: &mut egui::Ui) {
    let enabled = app.design().selected_id().is_some();
    if !enabled {
        ui.weak("Select an element to recolor it.");
    }

    for (name, colors) in COLOR_PALETTES {
        ui.label(name);
        ui.horizontal(|ui| {
            for color in colors {
                let swatch = egui::Button::new("")
                    .fill(color)
                    .min_size(vec2(18.0, 18.0))
                    .stroke(Stroke::new(
                        1.0,
                        ui.visuals().widgets.inactive.bg_stroke.color,
                    ));
                if ui.add_enabled(enabled, swatch).clicked() {
                    app.apply_color(color);
                }
            }
        });
    }
}
