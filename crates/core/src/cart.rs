//! Per-session shopping cart.
//!
//! A [`Cart`] merges repeat additions of the same item into a single
//! [`CartLine`] with a quantity, and maintains its running total as an
//! invariant: the total always equals the sum of line subtotals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::menu::MenuItem;

/// One line in a cart: a menu item at the price it was added, with a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// A session's cart. Lines keep insertion order; re-adding an item bumps
/// its quantity instead of appending a duplicate line.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    total: Decimal,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a menu item, merging into an existing line if present.
    pub fn add(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|line| line.name == item.name) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                name: item.name.clone(),
                price: item.price,
                category: item.category.clone(),
                quantity: 1,
            }),
        }
        self.total += item.price;
    }

    /// Empties the cart and zeroes the total.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.total = Decimal::ZERO;
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Total unit count across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}
