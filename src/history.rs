use crate::element::Element;

/// Linear undo/redo buffer over deep-copy snapshots of the element
/// collection.
///
/// A cursor points at the snapshot matching the live collection. Pushing
/// after an undo discards the redoable tail, the standard linear model.
/// Out-of-range undo/redo are silent no-ops.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHistory {
    snapshots: Vec<Vec<Element>>,
    cursor: usize,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Record a snapshot of the element collection after a committed
    /// mutation. Everything after the cursor becomes unreachable.
    pub fn push(&mut self, elements: &[Element]) {
        if !self.snapshots.is_empty() {
            self.snapshots.truncate(self.cursor + 1);
        }
        self.snapshots.push(elements.to_vec());
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot, returning the collection to restore.
    /// `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<&[Element]> {
        if self.cursor == 0 || self.snapshots.is_empty() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step forward one snapshot, returning the collection to restore.
    /// `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&[Element]> {
        if self.snapshots.is_empty() || self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.snapshots.is_empty() && self.cursor + 1 < self.snapshots.len()
    }

    /// Snapshot the cursor currently points at, matching the live
    /// collection right after any push/undo/redo.
    pub fn current(&self) -> Option<&[Element]> {
        self.snapshots.get(self.cursor).map(Vec::as_slice)
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ShapeKind, factory};
    use egui::Pos2;

    fn shape(id: usize, x: f32) -> Element {
        factory::create_shape(id, ShapeKind::Rectangle, Pos2::new(x, 0.0))
    }

    #[test]
    fn undo_redo_on_empty_history_are_noops() {
        let mut history = SnapshotHistory::new();
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn cursor_tracks_latest_push() {
        let mut history = SnapshotHistory::new();
        history.push(&[shape(1, 0.0)]);
        history.push(&[shape(1, 0.0), shape(2, 10.0)]);

        assert_eq!(history.len(), 2);
        assert_eq!(history.current().unwrap().len(), 2);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn push_after_undo_discards_redo_branch() {
        let mut history = SnapshotHistory::new();
        history.push(&[shape(1, 0.0)]);
        history.push(&[shape(1, 10.0)]);
        history.push(&[shape(1, 20.0)]);

        history.undo();
        history.undo();
        assert!(history.can_redo());

        history.push(&[shape(1, 99.0)]);
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().unwrap()[0].position().x, 99.0);
    }
}
