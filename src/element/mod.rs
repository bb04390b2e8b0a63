use egui::{Color32, Pos2, Rect};
use serde::{Deserialize, Serialize};

mod shape;
mod text;

pub use shape::{DEFAULT_SHAPE_SIZE, Shape, ShapeKind};
pub use text::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, Text};

/// A placed design element. Variants carry their own styling; position,
/// rotation and identity are common to both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Text(Text),
    Shape(Shape),
}

impl Element {
    /// Unique id for the lifetime of this element within its design.
    pub fn id(&self) -> usize {
        match self {
            Element::Text(text) => text.id(),
            Element::Shape(shape) => shape.id(),
        }
    }

    pub fn element_type(&self) -> &'static str {
        match self {
            Element::Text(_) => "text",
            Element::Shape(_) => "shape",
        }
    }

    /// Short human-readable label for the layers panel.
    pub fn label(&self) -> String {
        match self {
            Element::Text(text) => text.content.clone(),
            Element::Shape(shape) => shape.kind.to_string(),
        }
    }

    /// Top-left corner in canvas units.
    pub fn position(&self) -> Pos2 {
        match self {
            Element::Text(text) => text.position,
            Element::Shape(shape) => shape.position,
        }
    }

    pub fn set_position(&mut self, position: Pos2) {
        match self {
            Element::Text(text) => text.position = position,
            Element::Shape(shape) => shape.position = position,
        }
    }

    /// Rotation in degrees, clockwise.
    pub fn rotation(&self) -> f32 {
        match self {
            Element::Text(text) => text.rotation,
            Element::Shape(shape) => shape.rotation,
        }
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        match self {
            Element::Text(text) => text.rotation = degrees,
            Element::Shape(shape) => shape.rotation = degrees,
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Element::Text(text) => text.color,
            Element::Shape(shape) => shape.color,
        }
    }

    pub fn set_color(&mut self, color: Color32) {
        match self {
            Element::Text(text) => text.color = color,
            Element::Shape(shape) => shape.color = color,
        }
    }

    /// Bounding rectangle in canvas units, ignoring rotation.
    pub fn rect(&self) -> Rect {
        match self {
            Element::Text(text) => text.rect(),
            Element::Shape(shape) => shape.rect(),
        }
    }

    /// Test whether a canvas-space point falls on this element.
    pub fn hit_test(&self, pos: Pos2) -> bool {
        self.rect().contains(pos)
    }
}

/// Constructors used by the tool panels and by tests.
pub mod factory {
    use super::*;

    pub fn create_text(id: usize, content: impl Into<String>, position: Pos2) -> Element {
        Element::Text(Text::new(id, content, position))
    }

    pub fn create_shape(id: usize, kind: ShapeKind, position: Pos2) -> Element {
        Element::Shape(Shape::new(id, kind, position))
    }

    /// Initial position for a newly added element: a pseudo-random point
    /// inside x in [50, 250), y in [100, 300), so consecutive additions do
    /// not stack exactly on top of each other.
    pub fn scatter_position(seed: u64) -> Pos2 {
        // splitmix64
        let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;

        let x = 50.0 + (z & 0xFFFF) as f32 / 65536.0 * 200.0;
        let y = 100.0 + ((z >> 16) & 0xFFFF) as f32 / 65536.0 * 200.0;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_accessors_cover_both_variants() {
        let mut text = factory::create_text(1, "hello", Pos2::new(10.0, 20.0));
        let mut shape = factory::create_shape(2, ShapeKind::Circle, Pos2::new(30.0, 40.0));

        assert_eq!(text.id(), 1);
        assert_eq!(shape.id(), 2);
        assert_eq!(text.element_type(), "text");
        assert_eq!(shape.element_type(), "shape");

        text.set_position(Pos2::new(5.0, 6.0));
        shape.set_position(Pos2::new(7.0, 8.0));
        assert_eq!(text.position(), Pos2::new(5.0, 6.0));
        assert_eq!(shape.position(), Pos2::new(7.0, 8.0));

        text.set_rotation(45.0);
        assert_eq!(text.rotation(), 45.0);
        assert_eq!(shape.rotation(), 0.0);
    }

    #[test]
    fn hit_test_uses_bounding_rect() {
        let shape = factory::create_shape(1, ShapeKind::Rectangle, Pos2::new(100.0, 100.0));
        assert!(shape.hit_test(Pos2::new(140.0, 140.0)));
        assert!(!shape.hit_test(Pos2::new(99.0, 100.0)));
        assert!(!shape.hit_test(Pos2::new(100.0, 181.0)));
    }

    #[test]
    fn scatter_position_stays_inside_window() {
        for seed in 0..1000 {
            let pos = factory::scatter_position(seed);
            assert!((50.0..250.0).contains(&pos.x), "x out of range: {pos:?}");
            assert!((100.0..300.0).contains(&pos.y), "y out of range: {pos:?}");
        }
    }
}
