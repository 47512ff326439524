//! Selection store: the set of chosen item ids.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};

use crate::catalog::{Catalog, ItemId};
use crate::error::{Error, Result};
use crate::notify::{NotificationPort, SelectionChanged};

/// Immutable snapshot of the chosen item ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: FxHashSet<ItemId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.ids.iter()
    }

    /// Ids sorted lexicographically.
    pub fn sorted(&self) -> Vec<&ItemId> {
        let mut ids: Vec<&ItemId> = self.ids.iter().collect();
        ids.sort();
        ids
    }

    fn flip(&mut self, id: &ItemId) -> bool {
        if self.ids.remove(id.as_str()) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }
}

impl<'a> FromIterator<&'a str> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(ItemId::from).collect(),
        }
    }
}

impl FromIterator<ItemId> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = ItemId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Serialize for SelectionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted())
    }
}

/// Owns the current selection and reports every change to its port.
///
/// The set starts as the catalog's `included` items. Ids outside the catalog
/// are rejected and never enter the set.
#[derive(Debug)]
pub struct SelectionStore<P> {
    catalog: Arc<Catalog>,
    selected: SelectionSet,
    port: P,
}

impl<P: NotificationPort> SelectionStore<P> {
    pub fn new(catalog: Arc<Catalog>, port: P) -> Self {
        let selected = initial_selection(&catalog);
        Self {
            catalog,
            selected,
            port,
        }
    }

    /// Flip membership of `id` and return whether it is now selected.
    ///
    /// The port sees the change before this returns. Unknown ids fail with
    /// [`Error::UnknownItem`] and leave the selection unchanged.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let Some(item) = self.catalog.item(id) else {
            tracing::warn!(item = id, "rejected toggle of unknown item");
            return Err(Error::unknown_item(id));
        };

        let added = self.selected.flip(&item.id);
        tracing::debug!(item = id, added, selected = self.selected.len(), "toggled");

        let event = SelectionChanged::new(item.clone(), added);
        self.port.selection_changed(&event);
        Ok(added)
    }

    /// Ensure `id` is selected. Emits only if it was not selected before.
    pub fn select(&mut self, id: &str) -> Result<bool> {
        self.set(id, true)
    }

    /// Ensure `id` is not selected. Emits only if it was selected before.
    pub fn deselect(&mut self, id: &str) -> Result<bool> {
        self.set(id, false)
    }

    fn set(&mut self, id: &str, selected: bool) -> Result<bool> {
        if !self.catalog.contains(id) {
            return Err(Error::unknown_item(id));
        }
        if self.selected.contains(id) == selected {
            return Ok(false);
        }
        self.toggle(id)?;
        Ok(true)
    }

    /// Return to the initial selection, emitting one event per change in
    /// catalog order.
    pub fn reset(&mut self) -> usize {
        let initial = initial_selection(&self.catalog);
        let catalog = Arc::clone(&self.catalog);
        let mut changes = 0;
        for item in catalog.items() {
            let id = item.id.as_str();
            if self.selected.contains(id) != initial.contains(id) {
                let added = self.selected.flip(&item.id);
                self.port
                    .selection_changed(&SelectionChanged::new(item.clone(), added));
                changes += 1;
            }
        }
        tracing::debug!(changes, "selection reset");
        changes
    }

    /// False for ids the catalog does not know.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn current_selection(&self) -> SelectionSet {
        self.selected.clone()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn into_port(self) -> P {
        self.port
    }
}

fn initial_selection(catalog: &Catalog) -> SelectionSet {
    catalog.included_ids().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use crate::notify::{ChangeKind, EventLog};

    fn store() -> SelectionStore<EventLog> {
        SelectionStore::new(Arc::new(builtin::menu().unwrap()), EventLog::new())
    }

    #[test]
    fn starts_with_included_items() {
        let store = store();
        assert_eq!(store.current_selection(), ["butter"].into_iter().collect::<SelectionSet>());
        assert!(store.port().is_empty());
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut store = store();
        let before = store.current_selection();

        assert!(store.toggle("cheese").unwrap());
        assert!(!store.toggle("cheese").unwrap());

        assert_eq!(store.current_selection(), before);
        let kinds: Vec<ChangeKind> = store.port().selection_events().map(|e| e.kind).collect();
        assert_eq!(kinds, [ChangeKind::Added, ChangeKind::Removed]);
    }

    #[test]
    fn included_item_can_be_removed() {
        let mut store = store();
        assert!(!store.toggle("butter").unwrap());
        assert!(!store.is_selected("butter"));
        assert!(store.current_selection().is_empty());
    }

    #[test]
    fn unknown_item_is_rejected_without_side_effects() {
        let mut store = store();
        let before = store.current_selection();

        let err = store.toggle("nonexistent-id").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownItem {
                id: "nonexistent-id".to_string()
            }
        );
        assert_eq!(store.current_selection(), before);
        assert!(store.port().is_empty());
        assert!(!store.is_selected("nonexistent-id"));
    }

    #[test]
    fn snapshot_is_detached_from_later_changes() {
        let mut store = store();
        let snapshot = store.current_selection();
        store.toggle("paneer").unwrap();
        assert!(!snapshot.contains("paneer"));
        assert!(store.is_selected("paneer"));
    }

    #[test]
    fn select_and_deselect_are_idempotent() {
        let mut store = store();
        assert!(store.select("corn").unwrap());
        assert!(!store.select("corn").unwrap());
        assert!(store.deselect("corn").unwrap());
        assert!(!store.deselect("corn").unwrap());
        assert_eq!(store.port().len(), 2);
        assert!(store.select("truffle").is_err());
    }

    #[test]
    fn reset_restores_initial_selection() {
        let mut store = store();
        store.toggle("butter").unwrap();
        store.toggle("bacon").unwrap();
        store.port_mut().clear();

        assert_eq!(store.reset(), 2);
        assert_eq!(store.current_selection(), ["butter"].into_iter().collect::<SelectionSet>());
        let ids: Vec<&str> = store
            .port()
            .selection_events()
            .map(|e| e.item_id().as_str())
            .collect();
        assert_eq!(ids, ["butter", "bacon"]);
    }

    #[test]
    fn selection_serializes_sorted() {
        let set: SelectionSet = ["paneer", "butter", "cheese"].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"["butter","cheese","paneer"]"#
        );
    }
}
