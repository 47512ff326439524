//! The shop's launch menu.

use crate::catalog::{Catalog, Category, Item};
use crate::error::CatalogError;

/// Ids of the items that start out selected on the launch menu.
pub const BUILTIN_INCLUDED: &[&str] = &["butter"];

/// Name of the category opened when the builder first renders.
pub const DEFAULT_EXPANDED: &str = "Base";

/// Launch menu categories in display order.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new(
            "Base",
            vec![
                Item::new("butter", "Whipped Butter", 0, 100)
                    .with_allergens(["dairy"])
                    .included(),
                Item::new("cheese", "Kasar Cheese", 30, 120).with_allergens(["dairy"]),
                Item::new("sour-cream", "Sour Cream", 40, 80).with_allergens(["dairy"]),
            ],
        ),
        Category::new(
            "Classics",
            vec![
                Item::new("corn", "Sweet Corn", 25, 45),
                Item::new("olives", "Black Olives", 35, 30),
                Item::new("pickles", "Turkish Pickles", 25, 15),
                Item::new("mushrooms", "Sautéed Mushrooms", 40, 25),
            ],
        ),
        Category::new(
            "Fusion Indian",
            vec![
                Item::new("paneer", "Spiced Paneer", 60, 150).with_allergens(["dairy"]),
                Item::new("tikka", "Chicken Tikka", 80, 180),
                Item::new("keema", "Lamb Keema", 90, 200),
                Item::new("chutney", "Mint Chutney Drizzle", 20, 15),
            ],
        ),
        Category::new(
            "Global Twists",
            vec![
                Item::new("jalapeno", "Pickled Jalapeños", 30, 10),
                Item::new("bacon", "Crispy Bacon Bits", 70, 150),
                Item::new("feta", "Crumbled Feta", 50, 90).with_allergens(["dairy"]),
                Item::new("sriracha", "Sriracha Mayo", 25, 60).with_allergens(["egg"]),
            ],
        ),
        Category::new(
            "Crunch",
            vec![
                Item::new("onions", "Crispy Onions", 25, 80).with_allergens(["gluten"]),
                Item::new("seeds", "Toasted Seeds Mix", 30, 100).with_allergens(["nuts"]),
                Item::new("paprika", "Smoked Paprika Dust", 15, 5),
            ],
        ),
    ]
}

/// Validated launch menu.
pub fn menu() -> Result<Catalog, CatalogError> {
    Catalog::new(categories())?.expect_included(BUILTIN_INCLUDED)
}
