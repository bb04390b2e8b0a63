use crate::design::Design;
use egui::{Pos2, Vec2};

/// State of the placement engine. At most one element is dragged at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        id: usize,
        /// Pointer position minus element position at drag start, so the
        /// element does not jump to the pointer on the first move.
        offset: Vec2,
    },
}

/// Drives element dragging from pointer events.
///
/// All transitions are synchronous on the UI thread. Positions fed to the
/// design are clamped there, so the engine itself never needs to know the
/// canvas bounds.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
    /// True once the current drag has actually displaced the element, so
    /// a plain click does not count as a committed move.
    moved: bool,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer pressed at a canvas-space position.
    ///
    /// Hit-tests top-most first; on a hit the element is selected and a drag
    /// begins. Pressing while a drag is already active commits the previous
    /// drag at its current position and starts the new one. Returns the id
    /// of the element now being dragged, if any.
    pub fn pointer_down(&mut self, design: &mut Design, pointer: Pos2) -> Option<usize> {
        if let DragState::Dragging { id, .. } = self.state {
            log::debug!("Drag of element {id} superseded by a new pointer-down");
            self.state = DragState::Idle;
        }

        let id = design.hit_test(pointer)?;
        let element_pos = design.find_element_by_id(id)?.position();
        design.select(id);
        self.moved = false;
        self.state = DragState::Dragging {
            id,
            offset: pointer - element_pos,
        };
        Some(id)
    }

    /// Pointer moved. While dragging, reposition the element under the
    /// pointer, clamped to canvas bounds. Idle moves are ignored.
    pub fn pointer_move(&mut self, design: &mut Design, pointer: Pos2) {
        if let DragState::Dragging { id, offset } = self.state {
            let before = design
                .find_element_by_id(id)
                .map(|element| element.position());
            design.update_position(id, pointer - offset);
            let after = design
                .find_element_by_id(id)
                .map(|element| element.position());
            if before != after {
                self.moved = true;
            }
        }
    }

    /// Pointer released. Ends the drag regardless of position. Returns the
    /// id of the element if the drag displaced it; a plain click returns
    /// `None` so callers do not record an empty history entry.
    pub fn pointer_up(&mut self) -> Option<usize> {
        let moved = std::mem::take(&mut self.moved);
        match std::mem::take(&mut self.state) {
            DragState::Dragging { id, .. } if moved => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ShapeKind, factory};

    fn design_with_shape(id: usize, pos: Pos2) -> Design {
        let mut design = Design::default();
        design.add_element(factory::create_shape(id, ShapeKind::Rectangle, pos));
        design
    }

    #[test]
    fn press_on_empty_canvas_stays_idle() {
        let mut design = Design::default();
        let mut drag = DragController::new();
        assert_eq!(drag.pointer_down(&mut design, Pos2::new(10.0, 10.0)), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn drag_applies_pointer_offset() {
        let mut design = design_with_shape(1, Pos2::new(100.0, 100.0));
        let mut drag = DragController::new();

        // Grab the shape 20 units inside its rect.
        drag.pointer_down(&mut design, Pos2::new(120.0, 120.0));
        drag.pointer_move(&mut design, Pos2::new(150.0, 160.0));

        let element = design.find_element_by_id(1).unwrap();
        assert_eq!(element.position(), Pos2::new(130.0, 140.0));
        assert_eq!(drag.pointer_up(), Some(1));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn new_press_supersedes_active_drag() {
        let mut design = design_with_shape(1, Pos2::new(0.0, 0.0));
        design.add_element(factory::create_shape(
            2,
            ShapeKind::Circle,
            Pos2::new(200.0, 200.0),
        ));
        let mut drag = DragController::new();

        drag.pointer_down(&mut design, Pos2::new(10.0, 10.0));
        drag.pointer_move(&mut design, Pos2::new(50.0, 50.0));

        // Second press lands on the other element and takes over the drag.
        let grabbed = drag.pointer_down(&mut design, Pos2::new(210.0, 210.0));
        assert_eq!(grabbed, Some(2));

        // The first element keeps its committed position.
        assert_eq!(
            design.find_element_by_id(1).unwrap().position(),
            Pos2::new(40.0, 40.0)
        );
    }
}
