//! One builder screen: selection, browse state and pricing together.

use std::sync::Arc;

use crate::browse::{BrowseController, BrowseState};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::notify::NotificationPort;
use crate::selection::{SelectionSet, SelectionStore};
use crate::summary::{CategoryProgress, OrderSummary, Pricing, category_progress};

/// Composes the selection store and the browse controller over one catalog.
///
/// Selection changes and browse changes reach the same port, in call order.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use kumpir::{EventLog, MenuSession, Pricing, builtin};
///
/// let catalog = Arc::new(builtin::menu().unwrap());
/// let mut session =
///     MenuSession::new(catalog, Pricing::default(), Some("Base"), EventLog::new()).unwrap();
///
/// session.toggle("cheese").unwrap();
/// session.toggle("paneer").unwrap();
/// assert_eq!(session.summary().total_price, 289);
/// ```
#[derive(Debug)]
pub struct MenuSession<P> {
    selection: SelectionStore<P>,
    browse: BrowseController,
    pricing: Pricing,
}

impl<P: NotificationPort> MenuSession<P> {
    pub fn new(
        catalog: Arc<Catalog>,
        pricing: Pricing,
        default_expanded: Option<&str>,
        port: P,
    ) -> Result<Self> {
        let browse = BrowseController::new(Arc::clone(&catalog), default_expanded)?;
        tracing::debug!(
            items = catalog.item_count(),
            expanded = ?default_expanded,
            base_price = pricing.base_price,
            "session started"
        );
        Ok(Self {
            selection: SelectionStore::new(catalog, port),
            browse,
            pricing,
        })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.selection.catalog()
    }

    pub fn pricing(&self) -> Pricing {
        self.pricing
    }

    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        self.selection.toggle(id)
    }

    pub fn select(&mut self, id: &str) -> Result<bool> {
        self.selection.select(id)
    }

    pub fn deselect(&mut self, id: &str) -> Result<bool> {
        self.selection.deselect(id)
    }

    pub fn reset(&mut self) -> usize {
        self.selection.reset()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    pub fn current_selection(&self) -> SelectionSet {
        self.selection.current_selection()
    }

    pub fn expand(&mut self, name: &str) -> Result<bool> {
        let changed = self.browse.expand(name)?;
        self.announce_browse(changed);
        Ok(changed)
    }

    pub fn collapse_all(&mut self) -> bool {
        let changed = self.browse.collapse_all();
        self.announce_browse(changed);
        changed
    }

    pub fn toggle_expand(&mut self, name: &str) -> Result<bool> {
        let changed = self.browse.toggle_expand(name)?;
        self.announce_browse(changed);
        Ok(changed)
    }

    pub fn browse_state(&self) -> &BrowseState {
        self.browse.state()
    }

    pub fn summary(&self) -> OrderSummary {
        self.pricing
            .summarize(self.selection.catalog(), &self.selection.current_selection())
    }

    pub fn category_progress(&self) -> Vec<CategoryProgress> {
        category_progress(self.selection.catalog(), &self.selection.current_selection())
    }

    pub fn port(&self) -> &P {
        self.selection.port()
    }

    pub fn port_mut(&mut self) -> &mut P {
        self.selection.port_mut()
    }

    pub fn into_port(self) -> P {
        self.selection.into_port()
    }

    fn announce_browse(&mut self, changed: bool) {
        if changed {
            let state = self.browse.state().clone();
            self.selection.port_mut().browse_changed(&state);
        }
    }
}
