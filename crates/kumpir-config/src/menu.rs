//! Catalog section: categories and items as written in a config file.
//!
//! Numbers are read as signed integers so that a negative price produces a
//! catalog error naming the item rather than an opaque type mismatch.

use kumpir::{Catalog, CatalogError, Category, Item, builtin};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Ids that must be exactly the items flagged `included`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_included: Option<Vec<String>>,

    /// Menu categories in display order. Empty means the launch menu.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,

    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub calories: i64,

    #[serde(default)]
    pub allergens: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<bool>,
}

impl ItemConfig {
    pub fn to_item(&self) -> Result<Item, CatalogError> {
        let price = non_negative(&self.id, "price", self.price)?;
        let calories = non_negative(&self.id, "calories", self.calories)?;

        let mut item = Item::new(self.id.as_str(), self.name.as_str(), price, calories)
            .with_allergens(self.allergens.iter().cloned());
        item.included = self.included;
        Ok(item)
    }
}

impl From<&Item> for ItemConfig {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            price: i64::from(item.price),
            calories: i64::from(item.calories),
            allergens: item.allergens.iter().cloned().collect(),
            included: item.included,
        }
    }
}

impl From<&Category> for CategoryConfig {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            items: category.items.iter().map(ItemConfig::from).collect(),
        }
    }
}

impl CatalogConfig {
    /// The launch menu written out in full.
    pub fn builtin() -> Self {
        Self {
            categories: builtin::categories().iter().map(CategoryConfig::from).collect(),
            expected_included: Some(
                builtin::BUILTIN_INCLUDED
                    .iter()
                    .map(|id| id.to_string())
                    .collect(),
            ),
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.categories.is_empty()
    }

    /// Validate and build the catalog.
    pub fn build(&self) -> Result<Catalog, CatalogError> {
        let catalog = if self.is_builtin() {
            Catalog::new(builtin::categories())?
        } else {
            let categories = self
                .categories
                .iter()
                .map(|category| -> Result<Category, CatalogError> {
                    let items = category
                        .items
                        .iter()
                        .map(ItemConfig::to_item)
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok(Category::new(category.name.as_str(), items))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Catalog::new(categories)?
        };

        match (&self.expected_included, self.is_builtin()) {
            (Some(expected), _) => catalog.expect_included(expected),
            (None, true) => catalog.expect_included(builtin::BUILTIN_INCLUDED),
            (None, false) => Ok(catalog),
        }
    }
}

fn non_negative(id: &str, field: &'static str, value: i64) -> Result<u32, CatalogError> {
    u32::try_from(value).map_err(|_| CatalogError::InvalidNumber {
        id: id.to_string(),
        field,
        value,
    })
}
