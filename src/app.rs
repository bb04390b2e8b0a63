use crate::canvas::Zoom;
use crate::design::Design;
use crate::drag::DragController;
use crate::element::{ShapeKind, factory};
use crate::export::{ExportService, ExportSettings};
use crate::history::SnapshotHistory;
use crate::id_generator;
use crate::panels;
use crate::panels::properties_panel::PropertiesTab;
use crate::panels::tools_panel::ToolCategory;
use crate::renderer::Renderer;
use crate::session::{self, MemorySessionStore};
use crate::upload::UploadWatcher;
use crate::util::time;
use egui::Color32;

/// The design editor application shell.
///
/// Owns the design, the undo history and the drag state; the panels are
/// plain functions that dispatch back into the methods below. Every
/// committed mutation goes through [`StudioApp::commit`], which is what
/// keeps the history and the session store in step with the collection.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct StudioApp {
    // The design itself round-trips through the session store, not
    // through direct field serialization.
    #[serde(skip)]
    design: Design,
    #[serde(skip)]
    history: SnapshotHistory,
    #[serde(skip)]
    drag: DragController,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    export: ExportService,
    #[serde(skip)]
    pub(crate) uploads: UploadWatcher,

    session: MemorySessionStore,
    pub(crate) zoom: Zoom,
    pub(crate) garment_color: Color32,
    pub(crate) export_settings: ExportSettings,

    // Transient UI state.
    #[serde(skip)]
    pub(crate) show_export_panel: bool,
    #[serde(skip)]
    pub(crate) active_tool: ToolCategory,
    #[serde(skip)]
    pub(crate) properties_tab: PropertiesTab,
}

impl Default for StudioApp {
    fn default() -> Self {
        let design = Design::starter();
        let mut history = SnapshotHistory::new();
        history.push(design.elements());
        Self {
            design,
            history,
            drag: DragController::new(),
            renderer: Renderer::new(),
            export: ExportService::default(),
            uploads: UploadWatcher::new(),
            session: MemorySessionStore::new(),
            zoom: Zoom::default(),
            garment_color: Color32::WHITE,
            export_settings: ExportSettings::default(),
            show_export_panel: false,
            active_tool: ToolCategory::default(),
            properties_tab: PropertiesTab::default(),
        }
    }
}

impl StudioApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        if let Some(design) = session::load_design(&app.session) {
            log::info!("Restored design {} from session", design.id());
            app.design = design;
        }

        // Seed the history so the first undo returns to this state.
        app.history.clear();
        app.history.push(app.design.elements());
        app
    }

    pub fn design(&self) -> &Design {
        &self.design
    }

    pub fn design_mut(&mut self) -> &mut Design {
        &mut self.design
    }

    /// Pointer pressed at a canvas-space position.
    pub fn pointer_down(&mut self, pointer: egui::Pos2) {
        self.drag.pointer_down(&mut self.design, pointer);
    }

    /// Pointer moved to a canvas-space position.
    pub fn pointer_move(&mut self, pointer: egui::Pos2) {
        self.drag.pointer_move(&mut self.design, pointer);
    }

    /// Pointer released. Commits the drag as one history entry if it
    /// moved an element.
    pub fn pointer_up(&mut self) {
        if self.drag.pointer_up().is_some() {
            self.commit();
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn export_service_mut(&mut self) -> &mut ExportService {
        &mut self.export
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    /// Record the current element collection as a committed mutation:
    /// snapshot it for undo and write it to the session store.
    pub fn commit(&mut self) {
        self.history.push(self.design.elements());
        session::store_design(&mut self.session, &self.design);
    }

    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.undo() {
            let elements = snapshot.to_vec();
            self.design.restore_elements(elements);
            session::store_design(&mut self.session, &self.design);
        }
    }

    pub fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo() {
            let elements = snapshot.to_vec();
            self.design.restore_elements(elements);
            session::store_design(&mut self.session, &self.design);
        }
    }

    /// Add a text element at a scattered position and select it.
    pub fn add_text(&mut self) {
        let id = id_generator::generate_id();
        let position = factory::scatter_position(id as u64 ^ time::timestamp_secs());
        self.design
            .add_element(factory::create_text(id, "New text", position));
        self.design.select(id);
        self.commit();
    }

    /// Add a shape element at a scattered position and select it.
    pub fn add_shape(&mut self, kind: ShapeKind) {
        let id = id_generator::generate_id();
        let position = factory::scatter_position(id as u64 ^ time::timestamp_secs());
        self.design
            .add_element(factory::create_shape(id, kind, position));
        self.design.select(id);
        self.commit();
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.design.selected_id() {
            if self.design.remove(id).is_some() {
                self.commit();
            }
        }
    }

    pub fn duplicate_selected(&mut self) {
        if let Some(id) = self.design.selected_id() {
            if self.design.duplicate(id).is_some() {
                self.commit();
            }
        }
    }

    /// Recolor the selected element from a palette swatch.
    pub fn apply_color(&mut self, color: Color32) {
        let Some(id) = self.design.selected_id() else {
            return;
        };
        if let Some(element) = self.design.find_element_by_id_mut(id) {
            element.set_color(color);
            self.commit();
        }
    }
}

impl eframe::App for StudioApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        session::store_design(&mut self.session, &self.design);
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.uploads.check_for_dropped_files(ctx);

        panels::editor_header(self, ctx);
        panels::tools_panel(self, ctx);
        panels::properties_panel(self, ctx);
        panels::canvas_panel(self, ctx);

        if self.show_export_panel {
            panels::export_window(self, ctx);
        }
    }
}
