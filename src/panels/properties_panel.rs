use crate::StudioApp;
use crate::compliance::{self, CheckStatus};
use crate::element::Element;

/// Tabs of the right-hand panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertiesTab {
    #[default]
    Layers,
    Properties,
    Compliance,
}

impl PropertiesTab {
    const ALL: [PropertiesTab; 3] = [
        PropertiesTab::Layers,
        PropertiesTab::Properties,
        PropertiesTab::Compliance,
    ];

    fn name(&self) -> &'static str {
        match self {
            PropertiesTab::Layers => "Layers",
            PropertiesTab::Properties => "Properties",
            PropertiesTab::Compliance => "Compliance",
        }
    }
}

const FONT_FAMILIES: [&str; 6] = [
    "Arial",
    "Helvetica",
    "Times New Roman",
    "Georgia",
    "Verdana",
    "Courier New",
];

pub fn properties_panel(app: &mut StudioApp, ctx: &egui::Context) {
    egui::SidePanel::right("properties_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in PropertiesTab::ALL {
                    let selected = app.properties_tab == tab;
                    if ui.selectable_label(selected, tab.name()).clicked() {
                        app.properties_tab = tab;
                    }
                }
            });
            ui.separator();

            match app.properties_tab {
                PropertiesTab::Layers => layers_tab(app, ui),
                PropertiesTab::Properties => properties_tab(app, ui),
                PropertiesTab::Compliance => compliance_tab(app, ui),
            }
        });
}

fn layers_tab(app: &mut StudioApp, ui: &mut egui::Ui) {
    ui.label("Layers (top first)");

    // Top of the z-order is the end of the collection.
    let rows: Vec<(usize, String, &'static str)> = app
        .design()
        .elements()
        .iter()
        .rev()
        .map(|e| (e.id(), e.label(), e.element_type()))
        .collect();

    if rows.is_empty() {
        ui.weak("The canvas is empty.");
    }

    for (id, label, kind) in rows {
        let selected = app.design().selected_id() == Some(id);
        let icon = if kind == "text" { "\u{1F524}" } else { "\u{25A0}" };
        if ui
            .selectable_label(selected, format!("{icon} {label}"))
            .clicked()
        {
            app.design_mut().select(id);
        }
    }

    ui.separator();
    let has_selection = app.design().selected_id().is_some();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(has_selection, egui::Button::new("Duplicate"))
            .clicked()
        {
            app.duplicate_selected();
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Delete"))
            .clicked()
        {
            app.delete_selected();
        }
    });
}

fn properties_tab(app: &mut StudioApp, ui: &mut egui::Ui) {
    let Some(id) = app.design().selected_id() else {
        ui.weak("Select an element to edit its properties.");
        return;
    };

    let mut committed = false;
    if let Some(element) = app.design_mut().find_element_by_id_mut(id) {
        committed = match element {
            Element::Text(text) => text_properties(ui, text),
            Element::Shape(shape) => shape_properties(ui, shape),
        };
    }

    if committed {
        app.commit();
    }
}

fn text_properties(ui: &mut egui::Ui, text: &mut crate::element::Text) -> bool {
    let mut committed = false;

    ui.label("Content");
    let edit = ui.text_edit_singleline(&mut text.content);
    committed |= edit.lost_focus();

    ui.label("Font size");
    let size = ui.add(egui::Slider::new(&mut text.font_size, 8.0..=72.0).suffix("pt"));
    committed |= size.drag_stopped();

    ui.label("Font family");
    egui::ComboBox::from_id_salt("font_family")
        .selected_text(text.font_family.clone())
        .show_ui(ui, |ui| {
            for family in FONT_FAMILIES {
                if ui
                    .selectable_value(&mut text.font_family, family.to_owned(), family)
                    .clicked()
                {
                    committed = true;
                }
            }
        });

    ui.horizontal(|ui| {
        committed |= ui.checkbox(&mut text.bold, "Bold").changed();
        committed |= ui.checkbox(&mut text.italic, "Italic").changed();
    });

    ui.horizontal(|ui| {
        ui.label("Color");
        committed |= ui.color_edit_button_srgba(&mut text.color).changed();
    });

    ui.label("Rotation");
    let rotation = ui.add(egui::Slider::new(&mut text.rotation, -180.0..=180.0).suffix("\u{b0}"));
    committed |= rotation.drag_stopped();

    committed
}

fn shape_properties(ui: &mut egui::Ui, shape: &mut crate::element::Shape) -> bool {
    let mut committed = false;

    ui.label(format!("Shape: {}", shape.kind));

    ui.label("Width");
    let width = ui.add(egui::Slider::new(&mut shape.width, 10.0..=300.0).suffix("px"));
    committed |= width.drag_stopped();

    ui.label("Height");
    let height = ui.add(egui::Slider::new(&mut shape.height, 10.0..=300.0).suffix("px"));
    committed |= height.drag_stopped();

    ui.horizontal(|ui| {
        ui.label("Color");
        committed |= ui.color_edit_button_srgba(&mut shape.color).changed();
    });

    ui.label("Rotation");
    let rotation = ui.add(egui::Slider::new(&mut shape.rotation, -180.0..=180.0).suffix("\u{b0}"));
    committed |= rotation.drag_stopped();

    committed
}

fn compliance_tab(app: &mut StudioApp, ui: &mut egui::Ui) {
    let report = compliance::evaluate(app.design());

    ui.label(format!("Score: {}/100", report.score));
    ui.add(egui::ProgressBar::new(report.score as f32 / 100.0).show_percentage());
    ui.separator();

    for check in &report.checks {
        let (icon, color) = match check.status {
            CheckStatus::Pass => ("\u{2714}", egui::Color32::from_rgb(0x16, 0xA3, 0x4A)),
            CheckStatus::Warning => ("\u{26A0}", egui::Color32::from_rgb(0xD9, 0x77, 0x06)),
            CheckStatus::Fail => ("\u{2716}", egui::Color32::from_rgb(0xDC, 0x26, 0x26)),
        };
        ui.horizontal(|ui| {
            ui.colored_label(color, icon);
            ui.vertical(|ui| {
                ui.label(check.name);
                ui.small(check.message.as_str());
            });
        });
    }
}
