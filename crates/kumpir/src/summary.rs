//! Order summary: totals derived from the catalog and a selection.
//!
//! Nothing here is stored. A summary is recomputed from scratch on every call
//! and depends only on its inputs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Item};
use crate::selection::SelectionSet;

/// Price of the plain potato before any topping, in minor units.
pub const BASE_PRICE: u32 = 199;

/// Calories of the plain potato before any topping.
pub const BASE_CALORIES: u32 = 250;

/// Fixed starting point of every order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    pub base_price: u32,
    pub base_calories: u32,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            base_price: BASE_PRICE,
            base_calories: BASE_CALORIES,
        }
    }
}

impl Pricing {
    pub fn new(base_price: u32, base_calories: u32) -> Self {
        Self {
            base_price,
            base_calories,
        }
    }

    /// Totals for `selection` over `catalog`.
    ///
    /// Selected items come back in catalog order (category, then item), no
    /// matter in which order they were toggled.
    pub fn summarize(&self, catalog: &Catalog, selection: &SelectionSet) -> OrderSummary {
        let mut summary = OrderSummary {
            total_price: u64::from(self.base_price),
            total_calories: u64::from(self.base_calories),
            selected_items: Vec::with_capacity(selection.len()),
            allergens: BTreeSet::new(),
        };

        for item in catalog.items() {
            if !selection.contains(item.id.as_str()) {
                continue;
            }
            summary.total_price += u64::from(item.price);
            summary.total_calories += u64::from(item.calories);
            summary.allergens.extend(item.allergens.iter().cloned());
            summary.selected_items.push(item.clone());
        }

        summary
    }
}

/// Derived view of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub total_price: u64,
    pub total_calories: u64,
    pub selected_items: Vec<Item>,
    /// Union of allergen tags over the selected items.
    pub allergens: BTreeSet<String>,
}

impl OrderSummary {
    pub fn item_count(&self) -> usize {
        self.selected_items.len()
    }

    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.selected_items.iter().map(|i| i.name.as_str())
    }
}

/// [`Pricing::summarize`] with the default base price and calories.
pub fn summarize(catalog: &Catalog, selection: &SelectionSet) -> OrderSummary {
    Pricing::default().summarize(catalog, selection)
}

/// Selected-vs-total counter shown on a category header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProgress {
    pub name: String,
    pub selected: usize,
    pub total: usize,
}

/// One entry per category, in catalog order.
pub fn category_progress(catalog: &Catalog, selection: &SelectionSet) -> Vec<CategoryProgress> {
    catalog
        .categories()
        .iter()
        .map(|category| CategoryProgress {
            name: category.name.clone(),
            selected: category
                .items
                .iter()
                .filter(|i| selection.contains(i.id.as_str()))
                .count(),
            total: category.items.len(),
        })
        .collect()
}
