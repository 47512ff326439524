//! Notification port: how the core reports selection and browse changes.
//!
//! The core never renders anything. Every successful toggle produces a
//! [`SelectionChanged`] which is handed to the injected [`NotificationPort`]
//! before the toggle returns. The surrounding application decides how (or
//! whether) to show it.

use serde::{Deserialize, Serialize};

use crate::browse::BrowseState;
use crate::catalog::{Item, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
}

impl ChangeKind {
    pub fn from_added(added: bool) -> Self {
        if added {
            ChangeKind::Added
        } else {
            ChangeKind::Removed
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            ChangeKind::Added => ChangeKind::Removed,
            ChangeKind::Removed => ChangeKind::Added,
        }
    }
}

/// One membership change in the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChanged {
    pub kind: ChangeKind,
    pub item: Item,
}

impl SelectionChanged {
    pub fn new(item: Item, added: bool) -> Self {
        Self {
            kind: ChangeKind::from_added(added),
            item,
        }
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item.id
    }

    pub fn added(&self) -> bool {
        self.kind == ChangeKind::Added
    }

    /// Toast text: `Added Kasar Cheese!` / `Removed Kasar Cheese`.
    pub fn message(&self) -> String {
        match self.kind {
            ChangeKind::Added => format!("Added {}!", self.item.name),
            ChangeKind::Removed => format!("Removed {}", self.item.name),
        }
    }
}

/// Receiver for events emitted by the selection store and the session.
pub trait NotificationPort {
    fn selection_changed(&mut self, event: &SelectionChanged);

    /// Called after the expanded category changed. Ignored by default.
    fn browse_changed(&mut self, _state: &BrowseState) {}
}

impl<F> NotificationPort for F
where
    F: FnMut(&SelectionChanged),
{
    fn selection_changed(&mut self, event: &SelectionChanged) {
        self(event)
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPort;

impl NotificationPort for NoopPort {
    fn selection_changed(&mut self, _event: &SelectionChanged) {}
}

/// Anything a port observed, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Selection(SelectionChanged),
    Browse(BrowseState),
}

/// Records every event it receives.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Selection events only, in order.
    pub fn selection_events(&self) -> impl Iterator<Item = &SelectionChanged> {
        self.events.iter().filter_map(|e| match e {
            Event::Selection(change) => Some(change),
            Event::Browse(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl NotificationPort for EventLog {
    fn selection_changed(&mut self, event: &SelectionChanged) {
        self.events.push(Event::Selection(event.clone()));
    }

    fn browse_changed(&mut self, state: &BrowseState) {
        self.events.push(Event::Browse(state.clone()));
    }
}

/// Forwards events to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPort;

impl NotificationPort for TracingPort {
    fn selection_changed(&mut self, event: &SelectionChanged) {
        tracing::info!(item = %event.item.id, kind = ?event.kind, "{}", event.message());
    }

    fn browse_changed(&mut self, state: &BrowseState) {
        tracing::info!(expanded = ?state.expanded_category, "browse state changed");
    }
}
