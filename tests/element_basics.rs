use egui::{Color32, Pos2};
use tee_studio::ValidationError;
use tee_studio::element::{self, Element, ShapeKind, factory};

fn create_test_text() -> Element {
    factory::create_text(1, "Hello", Pos2::new(10.0, 20.0))
}

fn create_test_shape() -> Element {
    factory::create_shape(2, ShapeKind::Rectangle, Pos2::new(50.0, 60.0))
}

#[test]
fn test_element_creation() {
    let text = create_test_text();
    assert_eq!(text.id(), 1);
    assert_eq!(text.element_type(), "text");
    assert_eq!(text.rotation(), 0.0);

    let shape = create_test_shape();
    assert_eq!(shape.id(), 2);
    assert_eq!(shape.element_type(), "shape");
    assert_eq!(shape.color(), Color32::BLACK);
}

#[test]
fn test_text_defaults() {
    let Element::Text(text) = create_test_text() else {
        panic!("expected a text element");
    };
    assert_eq!(text.font_size, element::DEFAULT_FONT_SIZE);
    assert_eq!(text.font_family, element::DEFAULT_FONT_FAMILY);
    assert!(!text.bold);
    assert!(!text.italic);
}

#[test]
fn test_element_rect_and_hit_testing() {
    let shape = create_test_shape();
    let rect = shape.rect();
    assert_eq!(rect.min, Pos2::new(50.0, 60.0));
    assert_eq!(rect.width(), element::DEFAULT_SHAPE_SIZE);

    // Point inside the shape is a hit.
    assert!(shape.hit_test(Pos2::new(90.0, 100.0)));
    // Point outside is not.
    assert!(!shape.hit_test(Pos2::new(200.0, 200.0)));

    let text = create_test_text();
    assert!(text.hit_test(Pos2::new(12.0, 25.0)));
}

#[test]
fn test_set_position_and_rotation() {
    let mut shape = create_test_shape();
    shape.set_position(Pos2::new(5.0, 6.0));
    shape.set_rotation(90.0);
    assert_eq!(shape.position(), Pos2::new(5.0, 6.0));
    assert_eq!(shape.rotation(), 90.0);
}

#[test]
fn test_unknown_shape_kind_is_rejected() {
    let result = "blob".parse::<ShapeKind>();
    assert_eq!(
        result.unwrap_err(),
        ValidationError::UnknownShapeKind("blob".to_owned())
    );

    for kind in ShapeKind::ALL {
        assert_eq!(kind.as_str().parse::<ShapeKind>().unwrap(), kind);
    }
}
