use crate::design::Design;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storage key for the design being edited.
pub const CURRENT_DESIGN_KEY: &str = "design.current";

/// Key/value port for session persistence.
///
/// Core logic never touches platform storage directly; the application
/// shell owns an implementation and hands snapshots through this trait.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory session store. The app shell serializes it through eframe's
/// storage hook, which is what makes its contents survive restarts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Serialize the design into the store under [`CURRENT_DESIGN_KEY`].
pub fn store_design(store: &mut dyn SessionStore, design: &Design) {
    match serde_json::to_string(design) {
        Ok(json) => store.set(CURRENT_DESIGN_KEY, json),
        Err(err) => log::error!("Failed to serialize design for session store: {err}"),
    }
}

/// Load the stored design, if one exists and still parses.
pub fn load_design(store: &dyn SessionStore) -> Option<Design> {
    let json = store.get(CURRENT_DESIGN_KEY)?;
    match serde_json::from_str(&json) {
        Ok(design) => Some(design),
        Err(err) => {
            log::warn!("Discarding unparseable stored design: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ShapeKind, factory};
    use egui::Pos2;

    #[test]
    fn design_round_trips_through_store() {
        let mut design = Design::default();
        design.add_element(factory::create_shape(
            7,
            ShapeKind::Star,
            Pos2::new(20.0, 30.0),
        ));
        design.select(7);

        let mut store = MemorySessionStore::new();
        store_design(&mut store, &design);

        let restored = load_design(&store).unwrap();
        assert_eq!(restored.id(), design.id());
        assert_eq!(restored.elements(), design.elements());
        assert_eq!(restored.selected_id(), Some(7));
    }

    #[test]
    fn missing_or_corrupt_entries_yield_none() {
        let mut store = MemorySessionStore::new();
        assert!(load_design(&store).is_none());

        store.set(CURRENT_DESIGN_KEY, "not json".to_owned());
        assert!(load_design(&store).is_none());

        store.remove(CURRENT_DESIGN_KEY);
        assert!(store.get(CURRENT_DESIGN_KEY).is_none());
    }
}
