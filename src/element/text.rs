use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT_SIZE: f32 = 24.0;
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// A piece of text placed on the design canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    id: usize,
    pub content: String,
    /// Top-left corner in canvas units.
    pub position: Pos2,
    /// Rotation in degrees, clockwise.
    pub rotation: f32,
    pub font_size: f32,
    pub color: Color32,
    pub font_family: String,
    pub bold: bool,
    pub italic: bool,
}

impl Text {
    pub fn new(id: usize, content: impl Into<String>, position: Pos2) -> Self {
        Self {
            id,
            content: content.into(),
            position,
            rotation: 0.0,
            font_size: DEFAULT_FONT_SIZE,
            color: Color32::BLACK,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            bold: false,
            italic: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Reassign the id, used when duplicating an element.
    pub(crate) fn set_id(&mut self, id: usize) {
        self.id = id;
    }

    /// Approximate bounding rectangle, derived from the font metrics.
    ///
    /// The renderer lays the text out properly; this estimate only has to be
    /// good enough for hit testing and the layers panel.
    pub fn rect(&self) -> Rect {
        let width = self.font_size * 0.6 * self.content.chars().count().max(1) as f32;
        let height = self.font_size * 1.2;
        Rect::from_min_size(self.position, Vec2::new(width, height))
    }
}
