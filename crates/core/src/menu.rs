//! Menu catalog: the items a customer can order.
//!
//! A [`Catalog`] is an immutable, validated collection of [`MenuItem`]s.
//! Lookups are case-insensitive by item name. The built-in catalog mirrors
//! the restaurant's standard eight-item menu; deployments can swap in their
//! own via configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A single orderable item on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub description: String,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
            description: description.into(),
        }
    }
}

/// A validated, ordered collection of menu items.
///
/// Invariants enforced at construction:
/// - at least one item
/// - no two items share a name (case-insensitive)
/// - no negative prices
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog, validating the item list.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen: Vec<String> = Vec::with_capacity(items.len());
        for item in &items {
            if item.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(item.name.clone()));
            }
            let lowered = item.name.to_lowercase();
            if seen.contains(&lowered) {
                return Err(CatalogError::DuplicateName(item.name.clone()));
            }
            seen.push(lowered);
        }
        Ok(Self { items })
    }

    /// The standard eight-item menu.
    pub fn builtin() -> Self {
        let items = vec![
            MenuItem::new(
                "Margherita Pizza",
                Decimal::new(1299, 2),
                "Pizza",
                "Classic pizza with tomato sauce, mozzarella, and fresh basil",
            ),
            MenuItem::new(
                "Pepperoni Pizza",
                Decimal::new(1499, 2),
                "Pizza",
                "Pizza with pepperoni, tomato sauce, and mozzarella cheese",
            ),
            MenuItem::new(
                "Chicken Burger",
                Decimal::new(999, 2),
                "Burger",
                "Grilled chicken breast with lettuce, tomato, and mayo",
            ),
            MenuItem::new(
                "Beef Burger",
                Decimal::new(1199, 2),
                "Burger",
                "Juicy beef patty with cheese, lettuce, tomato, and onions",
            ),
            MenuItem::new(
                "Caesar Salad",
                Decimal::new(899, 2),
                "Salad",
                "Fresh romaine lettuce with Caesar dressing, croutons, and parmesan",
            ),
            MenuItem::new(
                "Pasta Carbonara",
                Decimal::new(1399, 2),
                "Pasta",
                "Creamy pasta with bacon, eggs, and parmesan cheese",
            ),
            MenuItem::new(
                "Fish Tacos",
                Decimal::new(1099, 2),
                "Tacos",
                "Grilled fish with cabbage slaw and chipotle mayo",
            ),
            MenuItem::new(
                "Chocolate Cake",
                Decimal::new(699, 2),
                "Dessert",
                "Rich chocolate cake with chocolate frosting",
            ),
        ];
        Self::new(items).expect("built-in menu is valid")
    }

    /// Case-insensitive lookup by exact item name.
    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    /// Items grouped by category, categories in first-seen order.
    pub fn by_category(&self) -> Vec<(&str, Vec<&MenuItem>)> {
        let mut groups: Vec<(&str, Vec<&MenuItem>)> = Vec::new();
        for item in &self.items {
            match groups.iter_mut().find(|(cat, _)| *cat == item.category) {
                Some((_, members)) => members.push(item),
                None => groups.push((item.category.as_str(), vec![item])),
            }
        }
        groups
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
