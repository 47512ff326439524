//! Accordion state over the catalog categories.
//!
//! At most one category is open. Opening another one closes the first.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseState {
    pub expanded_category: Option<String>,
}

impl BrowseState {
    pub fn collapsed() -> Self {
        Self::default()
    }

    pub fn expanded(name: impl Into<String>) -> Self {
        Self {
            expanded_category: Some(name.into()),
        }
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded_category.as_deref() == Some(name)
    }
}

#[derive(Debug, Clone)]
pub struct BrowseController {
    catalog: Arc<Catalog>,
    state: BrowseState,
}

impl BrowseController {
    /// Start with `default_expanded` open, or everything collapsed.
    pub fn new(catalog: Arc<Catalog>, default_expanded: Option<&str>) -> Result<Self> {
        let state = match default_expanded {
            Some(name) if !catalog.has_category(name) => {
                return Err(Error::unknown_category(name));
            }
            Some(name) => BrowseState::expanded(name),
            None => BrowseState::collapsed(),
        };
        Ok(Self { catalog, state })
    }

    /// Open `name`, closing whichever category was open.
    ///
    /// Returns whether the state changed.
    pub fn expand(&mut self, name: &str) -> Result<bool> {
        self.check(name)?;
        if self.state.is_expanded(name) {
            return Ok(false);
        }
        tracing::debug!(category = name, previous = ?self.state.expanded_category, "expand");
        self.state = BrowseState::expanded(name);
        Ok(true)
    }

    pub fn collapse_all(&mut self) -> bool {
        let changed = self.state.expanded_category.take().is_some();
        if changed {
            tracing::debug!("collapse all");
        }
        changed
    }

    /// Close `name` if it is the open one, otherwise open it.
    pub fn toggle_expand(&mut self, name: &str) -> Result<bool> {
        self.check(name)?;
        if self.state.is_expanded(name) {
            Ok(self.collapse_all())
        } else {
            self.expand(name)
        }
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub fn expanded_category(&self) -> Option<&str> {
        self.state.expanded_category.as_deref()
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.state.is_expanded(name)
    }

    fn check(&self, name: &str) -> Result<()> {
        if self.catalog.has_category(name) {
            Ok(())
        } else {
            tracing::warn!(category = name, "rejected unknown category");
            Err(Error::unknown_category(name))
        }
    }
}
