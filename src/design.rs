use crate::canvas::CanvasSize;
use crate::element::{Element, factory};
use crate::id_generator;
use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Offset applied when duplicating an element, in canvas units.
const DUPLICATE_OFFSET: Vec2 = Vec2::new(10.0, 10.0);

/// The ordered element collection for one design session, plus the
/// current selection.
///
/// Elements are stacked in insertion order: later elements draw on top.
/// The collection never reorders implicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Design {
    id: Uuid,
    canvas: CanvasSize,
    elements: Vec<Element>,
    selected: Option<usize>,
}

impl Design {
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            id: Uuid::new_v4(),
            canvas,
            elements: Vec::new(),
            selected: None,
        }
    }

    /// A fresh design with the placeholder text element every session
    /// starts from.
    pub fn starter() -> Self {
        let mut design = Self::new(CanvasSize::DEFAULT);
        design.add_element(factory::create_text(
            id_generator::generate_id(),
            "Your Design Here",
            Pos2::new(150.0, 200.0),
        ));
        design.selected = None;
        design
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Elements in z-order: first is bottom-most, last draws on top.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn selected_id(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.find_element_by_id(id))
    }

    pub fn find_element_by_id(&self, id: usize) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn find_element_by_id_mut(&mut self, id: usize) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Append an element at the top of the z-order.
    pub fn add_element(&mut self, element: Element) {
        log::debug!(
            "Adding {} element {} at {:?}",
            element.element_type(),
            element.id(),
            element.position()
        );
        self.elements.push(element);
    }

    /// Select an element by id. No-op if the id is not in the collection.
    pub fn select(&mut self, id: usize) {
        if self.find_element_by_id(id).is_some() {
            self.selected = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Move an element, clamping the position into canvas bounds.
    /// No-op if the id is not in the collection.
    pub fn update_position(&mut self, id: usize, pos: Pos2) {
        let clamped = self.canvas.clamp(pos);
        if let Some(element) = self.find_element_by_id_mut(id) {
            element.set_position(clamped);
        }
    }

    /// Remove an element by id, returning it if present. Selection is
    /// cleared when it pointed at the removed element.
    pub fn remove(&mut self, id: usize) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        let removed = self.elements.remove(index);
        log::debug!("Removed {} element {}", removed.element_type(), id);
        Some(removed)
    }

    /// Duplicate an element with a fresh id, slightly offset so the copy
    /// is visible, and select the copy.
    pub fn duplicate(&mut self, id: usize) -> Option<usize> {
        let source = self.find_element_by_id(id)?.clone();
        let new_id = id_generator::generate_id();
        let mut copy = source;
        match &mut copy {
            Element::Text(text) => text.set_id(new_id),
            Element::Shape(shape) => shape.set_id(new_id),
        }
        let offset = self.canvas.clamp(copy.position() + DUPLICATE_OFFSET);
        copy.set_position(offset);
        self.elements.push(copy);
        self.selected = Some(new_id);
        Some(new_id)
    }

    /// Top-most element under a canvas-space point, if any.
    pub fn hit_test(&self, pos: Pos2) -> Option<usize> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.hit_test(pos))
            .map(|e| e.id())
    }

    /// Replace the element collection wholesale, e.g. when restoring a
    /// history snapshot. Selection is dropped if its element is gone.
    pub fn restore_elements(&mut self, elements: Vec<Element>) {
        self.elements = elements;
        if let Some(id) = self.selected {
            if self.find_element_by_id(id).is_none() {
                self.selected = None;
            }
        }
    }
}

impl Default for Design {
    fn default() -> Self {
        Self::new(CanvasSize::DEFAULT)
    }
}
