//! The static menu: ordered categories of selectable items.
//!
//! A [`Catalog`] is validated once at construction and never mutated
//! afterwards. Everything downstream (selection, summary, browse state) relies
//! on its two invariants: item ids are unique across the whole catalog and
//! category names are unique.

pub mod builtin;

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Identifier of a catalog item, unique across all categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A selectable topping.
///
/// `price` is in minor currency units. `included` marks an item that starts
/// out selected; it has no effect on later toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: u32,
    pub calories: u32,
    #[serde(default)]
    pub allergens: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<bool>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: u32, calories: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            calories,
            allergens: BTreeSet::new(),
            included: None,
        }
    }

    pub fn with_allergens<I, S>(mut self, allergens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergens = allergens.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the item as selected by default.
    pub fn included(mut self) -> Self {
        self.included = Some(true);
        self
    }

    pub fn is_included(&self) -> bool {
        self.included.unwrap_or(false)
    }

    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<Item>,
}

impl Category {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// Position of an item inside the catalog: (category index, item index).
type Slot = (usize, usize);

/// Validated, immutable menu.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    items: FxHashMap<ItemId, Slot>,
    category_index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids or names and empty identifiers.
    ///
    /// # Example
    ///
    /// ```
    /// use kumpir::{Catalog, Category, Item};
    ///
    /// let catalog = Catalog::new(vec![Category::new(
    ///     "Base",
    ///     vec![Item::new("butter", "Whipped Butter", 0, 100).included()],
    /// )])
    /// .unwrap();
    /// assert!(catalog.contains("butter"));
    /// ```
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut items: FxHashMap<ItemId, Slot> = FxHashMap::default();
        let mut category_index: FxHashMap<String, usize> = FxHashMap::default();

        for (cat_idx, category) in categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(CatalogError::EmptyCategoryName { index: cat_idx });
            }
            if category_index.insert(category.name.clone(), cat_idx).is_some() {
                return Err(CatalogError::DuplicateCategory {
                    name: category.name.clone(),
                });
            }

            for (item_idx, item) in category.items.iter().enumerate() {
                if item.id.as_str().trim().is_empty() {
                    return Err(CatalogError::EmptyItemId {
                        category: category.name.clone(),
                    });
                }
                if item.name.trim().is_empty() {
                    return Err(CatalogError::EmptyItemName {
                        id: item.id.to_string(),
                    });
                }
                if let Some(&(first_cat, _)) = items.get(item.id.as_str()) {
                    return Err(CatalogError::DuplicateItemId {
                        id: item.id.to_string(),
                        first: categories[first_cat].name.clone(),
                        second: category.name.clone(),
                    });
                }
                items.insert(item.id.clone(), (cat_idx, item_idx));
            }
        }

        tracing::debug!(
            categories = categories.len(),
            items = items.len(),
            "catalog validated"
        );

        Ok(Self {
            categories,
            items,
            category_index,
        })
    }

    /// Check that the `included` items are exactly `expected`.
    pub fn expect_included<I, S>(self, expected: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let expected: BTreeSet<String> = expected
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();
        let actual: BTreeSet<String> = self.included_ids().map(|id| id.to_string()).collect();

        if expected != actual {
            return Err(CatalogError::IncludedMismatch {
                expected: expected.into_iter().collect(),
                actual: actual.into_iter().collect(),
            });
        }
        Ok(self)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.category_index
            .get(name)
            .map(|&idx| &self.categories[idx])
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.category_index.contains_key(name)
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items
            .get(id)
            .map(|&(cat, idx)| &self.categories[cat].items[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Category holding the given item.
    pub fn category_of(&self, id: &str) -> Option<&Category> {
        self.items.get(id).map(|&(cat, _)| &self.categories[cat])
    }

    /// All items, category order outer and item order inner.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn included_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items().filter(|i| i.is_included()).map(|i| &i.id)
    }
}
