use crate::error::ValidationError;
use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SHAPE_SIZE: f32 = 80.0;

/// Geometric shape kinds offered by the shapes tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Star,
    Heart,
    Arrow,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Star,
        ShapeKind::Heart,
        ShapeKind::Arrow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Star => "star",
            ShapeKind::Heart => "heart",
            ShapeKind::Arrow => "arrow",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ValidationError;

    /// Parse a shape kind name. Unknown names are an error, never a
    /// silent fallback to a rectangle.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangle" => Ok(ShapeKind::Rectangle),
            "circle" | "cercle" => Ok(ShapeKind::Circle),
            "triangle" => Ok(ShapeKind::Triangle),
            "star" => Ok(ShapeKind::Star),
            "heart" => Ok(ShapeKind::Heart),
            "arrow" => Ok(ShapeKind::Arrow),
            _ => Err(ValidationError::UnknownShapeKind(s.to_owned())),
        }
    }
}

/// A geometric shape placed on the design canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    id: usize,
    pub kind: ShapeKind,
    /// Top-left corner in canvas units.
    pub position: Pos2,
    /// Rotation in degrees, clockwise.
    pub rotation: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color32,
}

impl Shape {
    pub fn new(id: usize, kind: ShapeKind, position: Pos2) -> Self {
        Self {
            id,
            kind,
            position,
            rotation: 0.0,
            width: DEFAULT_SHAPE_SIZE,
            height: DEFAULT_SHAPE_SIZE,
            color: Color32::BLACK,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Reassign the id, used when duplicating an element.
    pub(crate) fn set_id(&mut self, id: usize) {
        self.id = id;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, Vec2::new(self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds() {
        assert_eq!("rectangle".parse::<ShapeKind>(), Ok(ShapeKind::Rectangle));
        assert_eq!(" Circle ".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert_eq!("ARROW".parse::<ShapeKind>(), Ok(ShapeKind::Arrow));
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = "hexagon".parse::<ShapeKind>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownShapeKind("hexagon".to_owned()));
    }
}
