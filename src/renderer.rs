use crate::canvas::CanvasSize;
use crate::design::Design;
use crate::element::Element;
use egui::epaint::TextShape;
use egui::{Color32, FontFamily, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2, pos2, vec2};

/// Size of the garment mockup in design-space units.
pub const MOCKUP_SIZE: Vec2 = vec2(400.0, 500.0);

/// Offset of the printable canvas origin inside the mockup.
pub const CANVAS_OFFSET: Vec2 = vec2(50.0, 70.0);

/// Spacing of the alignment grid, in canvas units.
const GRID_STEP: f32 = 20.0;

const OUTLINE: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);
const SELECTION: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);
const HANDLE_RADIUS: f32 = 4.0;

/// Mapping between canvas units and screen pixels for one frame.
#[derive(Debug, Clone, Copy)]
pub struct CanvasTransform {
    /// Screen position of the canvas origin (0, 0).
    pub origin: Pos2,
    pub scale: f32,
}

impl CanvasTransform {
    /// Center the mockup in the given panel rect at the given zoom scale.
    pub fn fit(panel: Rect, scale: f32) -> Self {
        let mockup_min = panel.center() - MOCKUP_SIZE * scale / 2.0;
        Self {
            origin: mockup_min + CANVAS_OFFSET * scale,
            scale,
        }
    }

    pub fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.origin + pos.to_vec2() * self.scale
    }

    pub fn to_canvas(&self, pos: Pos2) -> Pos2 {
        ((pos - self.origin) / self.scale).to_pos2()
    }

    fn screen_rect(&self, rect: Rect) -> Rect {
        Rect::from_min_max(self.to_screen(rect.min), self.to_screen(rect.max))
    }
}

/// Draws the garment mockup and the element collection. Strictly a
/// read-only consumer of the design.
#[derive(Debug)]
pub struct Renderer {
    pub show_grid: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self { show_grid: true }
    }

    pub fn render(
        &self,
        painter: &Painter,
        transform: &CanvasTransform,
        design: &Design,
        garment_color: Color32,
    ) {
        self.draw_garment(painter, transform, garment_color);
        if self.show_grid {
            self.draw_grid(painter, transform, design.canvas());
        }
        self.draw_canvas_border(painter, transform, design);
        for element in design.elements() {
            draw_element(painter, transform, element);
        }
        if let Some(element) = design.selected_element() {
            self.draw_selection(painter, transform, element);
        }
    }

    fn draw_garment(&self, painter: &Painter, t: &CanvasTransform, color: Color32) {
        let stroke = Stroke::new(1.0, OUTLINE);
        // The mockup lives in its own 400x500 space, offset from canvas space.
        let m = |x: f32, y: f32| t.to_screen(pos2(x - CANVAS_OFFSET.x, y - CANVAS_OFFSET.y));

        // Torso.
        painter.rect(
            Rect::from_min_max(m(50.0, 150.0), m(350.0, 480.0)),
            0.0,
            color,
            stroke,
        );
        // Chest band with chamfered shoulders.
        painter.add(Shape::convex_polygon(
            vec![
                m(80.0, 150.0),
                m(80.0, 100.0),
                m(100.0, 80.0),
                m(300.0, 80.0),
                m(320.0, 100.0),
                m(320.0, 150.0),
            ],
            color,
            stroke,
        ));
        // Sleeves.
        painter.add(Shape::convex_polygon(
            vec![m(50.0, 150.0), m(20.0, 180.0), m(20.0, 220.0), m(50.0, 200.0)],
            color,
            stroke,
        ));
        painter.add(Shape::convex_polygon(
            vec![
                m(350.0, 150.0),
                m(380.0, 180.0),
                m(380.0, 220.0),
                m(350.0, 200.0),
            ],
            color,
            stroke,
        ));
        // Neck opening.
        painter.add(Shape::ellipse_filled(
            m(200.0, 82.0),
            vec2(50.0, 18.0) * t.scale,
            Color32::WHITE,
        ));
    }

    fn draw_grid(&self, painter: &Painter, t: &CanvasTransform, canvas: CanvasSize) {
        let stroke = Stroke::new(0.5, Color32::from_rgba_unmultiplied(0x94, 0xA3, 0xB8, 50));
        let mut x = 0.0;
        while x <= canvas.width {
            painter.line_segment(
                [t.to_screen(pos2(x, 0.0)), t.to_screen(pos2(x, canvas.height))],
                stroke,
            );
            x += GRID_STEP;
        }
        let mut y = 0.0;
        while y <= canvas.height {
            painter.line_segment(
                [t.to_screen(pos2(0.0, y)), t.to_screen(pos2(canvas.width, y))],
                stroke,
            );
            y += GRID_STEP;
        }
    }

    fn draw_canvas_border(&self, painter: &Painter, t: &CanvasTransform, design: &Design) {
        // The print-area outline only appears while an element is selected.
        if design.selected_id().is_none() {
            return;
        }
        let canvas = design.canvas();
        let rect = t.screen_rect(Rect::from_min_size(
            Pos2::ZERO,
            vec2(canvas.width, canvas.height),
        ));
        let stroke = Stroke::new(1.0, SELECTION);
        for [a, b] in [
            [rect.left_top(), rect.right_top()],
            [rect.right_top(), rect.right_bottom()],
            [rect.right_bottom(), rect.left_bottom()],
            [rect.left_bottom(), rect.left_top()],
        ] {
            painter.extend(Shape::dashed_line(&[a, b], stroke, 6.0, 4.0));
        }
    }

    fn draw_selection(&self, painter: &Painter, t: &CanvasTransform, element: &Element) {
        let rect = t.screen_rect(element.rect()).expand(4.0);
        painter.rect_stroke(rect, 2.0, Stroke::new(2.0, SELECTION));

        for corner in [
            rect.left_top(),
            rect.right_top(),
            rect.left_bottom(),
            rect.right_bottom(),
        ] {
            painter.circle_filled(corner, HANDLE_RADIUS, SELECTION);
        }
        // Rotation handle above the top edge.
        painter.circle_filled(
            rect.center_top() - vec2(0.0, 12.0),
            HANDLE_RADIUS,
            Color32::from_rgb(0x64, 0x74, 0x8B),
        );
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_element(painter: &Painter, t: &CanvasTransform, element: &Element) {
    match element {
        Element::Text(text) => draw_text(painter, t, text),
        Element::Shape(shape) => draw_shape(painter, t, shape),
    }
}

fn draw_text(painter: &Painter, t: &CanvasTransform, text: &crate::element::Text) {
    // The default egui fonts ship no bold or italic faces and no named
    // families; the family maps onto the proportional/monospace pair and
    // the style flags ride along as design metadata.
    let family = match text.font_family.as_str() {
        "Courier" | "Courier New" => FontFamily::Monospace,
        _ => FontFamily::Proportional,
    };
    let font = FontId::new(text.font_size * t.scale, family);
    let galley = painter.layout_no_wrap(text.content.clone(), font, text.color);

    let mut shape = TextShape::new(t.to_screen(text.position), galley, text.color);
    shape.angle = text.rotation.to_radians();
    painter.add(shape);
}

fn draw_shape(painter: &Painter, t: &CanvasTransform, shape: &crate::element::Shape) {
    use crate::element::ShapeKind;

    let rect = t.screen_rect(shape.rect());
    let center = rect.center();
    let angle = shape.rotation.to_radians();
    let rot = |p: Pos2| rotate_around(p, center, angle);
    let color = shape.color;

    match shape.kind {
        ShapeKind::Rectangle => {
            polygon(painter, vec![
                rot(rect.left_top()),
                rot(rect.right_top()),
                rot(rect.right_bottom()),
                rot(rect.left_bottom()),
            ], color);
        }
        ShapeKind::Circle => {
            painter.add(Shape::ellipse_filled(center, rect.size() / 2.0, color));
        }
        ShapeKind::Triangle => {
            polygon(painter, vec![
                rot(rect.center_top()),
                rot(rect.right_bottom()),
                rot(rect.left_bottom()),
            ], color);
        }
        // Concave outlines are built from convex pieces, since the
        // tessellator only fills convex polygons correctly.
        ShapeKind::Star => draw_star(painter, rect, color, rot),
        ShapeKind::Heart => draw_heart(painter, rect, color, rot),
        ShapeKind::Arrow => draw_arrow(painter, rect, color, rot),
    }
}

fn draw_star(painter: &Painter, rect: Rect, color: Color32, rot: impl Fn(Pos2) -> Pos2) {
    let center = rect.center();
    let outer = rect.width().min(rect.height()) / 2.0;
    let inner = outer * 0.4;

    let point_at = |radius: f32, angle: f32| {
        center + vec2(angle.sin(), -angle.cos()) * radius
    };

    let step = std::f32::consts::TAU / 5.0;
    let mut core = Vec::with_capacity(5);
    for i in 0..5 {
        let tip_angle = i as f32 * step;
        let left = point_at(inner, tip_angle - step / 2.0);
        let right = point_at(inner, tip_angle + step / 2.0);
        let tip = point_at(outer, tip_angle);
        polygon(painter, vec![rot(left), rot(tip), rot(right)], color);
        core.push(rot(left));
    }
    polygon(painter, core, color);
}

fn draw_heart(painter: &Painter, rect: Rect, color: Color32, rot: impl Fn(Pos2) -> Pos2) {
    let lobe_r = rect.width() / 4.0;
    let lobe_y = rect.top() + lobe_r;

    painter.circle_filled(rot(pos2(rect.left() + lobe_r, lobe_y)), lobe_r, color);
    painter.circle_filled(rot(pos2(rect.right() - lobe_r, lobe_y)), lobe_r, color);
    polygon(painter, vec![
        rot(pos2(rect.left(), lobe_y)),
        rot(pos2(rect.right(), lobe_y)),
        rot(pos2(rect.center().x, rect.bottom())),
    ], color);
}

fn draw_arrow(painter: &Painter, rect: Rect, color: Color32, rot: impl Fn(Pos2) -> Pos2) {
    let shaft_half = rect.height() / 6.0;
    let head_start = rect.left() + rect.width() * 0.6;
    let mid = rect.center().y;

    polygon(painter, vec![
        rot(pos2(rect.left(), mid - shaft_half)),
        rot(pos2(head_start, mid - shaft_half)),
        rot(pos2(head_start, mid + shaft_half)),
        rot(pos2(rect.left(), mid + shaft_half)),
    ], color);
    polygon(painter, vec![
        rot(pos2(head_start, rect.top())),
        rot(pos2(rect.right(), mid)),
        rot(pos2(head_start, rect.bottom())),
    ], color);
}

fn polygon(painter: &Painter, points: Vec<Pos2>, color: Color32) {
    painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
}

fn rotate_around(p: Pos2, center: Pos2, angle: f32) -> Pos2 {
    let v = p - center;
    let (sin, cos) = angle.sin_cos();
    center + vec2(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_round_trips() {
        let panel = Rect::from_min_size(pos2(100.0, 50.0), vec2(800.0, 600.0));
        let t = CanvasTransform::fit(panel, 1.5);

        let canvas_pos = pos2(150.0, 200.0);
        let screen = t.to_screen(canvas_pos);
        let back = t.to_canvas(screen);
        assert!((back.x - canvas_pos.x).abs() < 0.001);
        assert!((back.y - canvas_pos.y).abs() < 0.001);
    }

    #[test]
    fn rotation_preserves_distance_from_center() {
        let center = pos2(10.0, 10.0);
        let p = pos2(20.0, 10.0);
        let rotated = rotate_around(p, center, std::f32::consts::FRAC_PI_2);
        assert!((rotated.x - 10.0).abs() < 0.001);
        assert!((rotated.y - 20.0).abs() < 0.001);
    }
}
