//! Per-item completion and note state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::errors::CoreError;

/// Completion flag and free-text note of a single test item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemState {
    pub completed: bool,
    /// Stored verbatim; only trimmed when evaluating the note requirement.
    pub note: String,
}

impl ItemState {
    /// Whether the note has any non-whitespace content.
    #[must_use]
    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }

    /// Checked off, or explained by a note.
    #[must_use]
    pub fn is_accounted_for(&self) -> bool {
        self.completed || self.has_note()
    }
}

/// Owns one [`ItemState`] per catalog item, keyed by item description.
#[derive(Debug, Clone)]
pub struct ItemStateStore {
    states: HashMap<String, ItemState>,
}

impl ItemStateStore {
    /// Create default state (unchecked, empty note) for every catalog item.
    #[must_use]
    pub fn initialize(catalog: &Catalog) -> Self {
        let states = catalog
            .items()
            .map(|item| (item.description().to_string(), ItemState::default()))
            .collect();
        Self { states }
    }

    /// # Errors
    ///
    /// Returns [`CoreError::UnknownItem`] if `item` is not in the catalog.
    pub fn set_completed(&mut self, item: &str, completed: bool) -> Result<(), CoreError> {
        self.state_mut(item)?.completed = completed;
        tracing::debug!(item, completed, "item completion changed");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`CoreError::UnknownItem`] if `item` is not in the catalog.
    pub fn set_note(&mut self, item: &str, note: impl Into<String>) -> Result<(), CoreError> {
        let state = self.state_mut(item)?;
        state.note = note.into();
        tracing::debug!(item, note_len = state.note.len(), "item note changed");
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot<'_> {
        StateSnapshot {
            states: &self.states,
        }
    }

    fn state_mut(&mut self, item: &str) -> Result<&mut ItemState, CoreError> {
        self.states
            .get_mut(item)
            .ok_or_else(|| CoreError::UnknownItem(item.to_string()))
    }
}

/// Read-only view over the store.
#[derive(Debug, Clone, Copy)]
pub struct StateSnapshot<'a> {
    states: &'a HashMap<String, ItemState>,
}

impl<'a> StateSnapshot<'a> {
    #[must_use]
    pub fn get(&self, item: &str) -> Option<&'a ItemState> {
        self.states.get(item)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.states.values().filter(|state| state.completed).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a ItemState)> {
        self.states
            .iter()
            .map(|(item, state)| (item.as_str(), state))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::catalog::CategoryDefinition;

    fn small_catalog() -> Catalog {
        Catalog::new(vec![
            CategoryDefinition::new("One", ["a", "b"]),
            CategoryDefinition::new("Two", ["c"]),
        ])
        .unwrap()
    }

    #[test]
    fn initialize_creates_default_state_per_item() {
        let catalog = Catalog::store_and_forward();
        let store = ItemStateStore::initialize(&catalog);
        let snapshot = store.snapshot();

        assert_eq!(snapshot.len(), catalog.item_count());
        for item in catalog.items() {
            assert_eq!(snapshot.get(item.description()), Some(&ItemState::default()));
        }
        assert_eq!(snapshot.completed_count(), 0);
    }

    #[test]
    fn mutations_update_only_the_target_item() {
        let mut store = ItemStateStore::initialize(&small_catalog());
        store.set_completed("a", true).unwrap();
        store.set_note("b", "card reader jammed").unwrap();

        let snapshot = store.snapshot();
        assert!(snapshot.get("a").unwrap().completed);
        assert_eq!(snapshot.get("b").unwrap().note, "card reader jammed");
        assert_eq!(snapshot.get("c"), Some(&ItemState::default()));
    }

    #[test]
    fn toggling_back_clears_completion() {
        let mut store = ItemStateStore::initialize(&small_catalog());
        store.set_completed("c", true).unwrap();
        store.set_completed("c", false).unwrap();
        assert!(!store.snapshot().get("c").unwrap().completed);
    }

    #[test]
    fn notes_are_stored_verbatim() {
        let mut store = ItemStateStore::initialize(&small_catalog());
        store.set_note("a", "  padded note \t").unwrap();
        assert_eq!(store.snapshot().get("a").unwrap().note, "  padded note \t");
    }

    #[test]
    fn unknown_item_is_rejected() {
        let mut store = ItemStateStore::initialize(&small_catalog());
        let err = store.set_completed("nope", true).unwrap_err();
        assert!(matches!(err, CoreError::UnknownItem(ref item) if item == "nope"));
        assert!(store.set_note("nope", "x").is_err());
    }

    #[rstest]
    #[case(false, "", false)]
    #[case(false, "   ", false)]
    #[case(false, "\t\n", false)]
    #[case(false, "failed", true)]
    #[case(true, "", true)]
    #[case(true, "  ", true)]
    fn accounted_for(#[case] completed: bool, #[case] note: &str, #[case] expected: bool) {
        let state = ItemState {
            completed,
            note: note.to_string(),
        };
        assert_eq!(state.is_accounted_for(), expected);
    }
}
