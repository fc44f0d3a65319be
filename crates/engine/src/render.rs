//! Reply rendering — every customer-facing string lives here.
//!
//! The wording is part of the product; tests pin it down. Prices always
//! render with two decimals.

use garcon_core::{Cart, CartLine, Catalog, MenuItem};
use rust_decimal::Decimal;

pub const NO_MATCH_REPLY: &str =
    "I couldn't find that item on our menu. Would you like to see the menu again?";

pub const EMPTY_CART_REPLY: &str = "Your cart is empty! 🛒 Would you like to see our menu?";

pub const EMPTY_CART_CONFIRM_REPLY: &str =
    "Your cart is empty! Please add some items before confirming your order.";

fn money(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// One cart line: quantity folds into the name, price shows the subtotal.
fn cart_line(line: &CartLine) -> String {
    if line.quantity > 1 {
        format!("• {} x{} - {}\n", line.name, line.quantity, money(line.subtotal()))
    } else {
        format!("• {} - {}\n", line.name, money(line.price))
    }
}

/// The full menu, grouped by category.
pub fn menu_text(catalog: &Catalog) -> String {
    let mut text = String::from("🍽️ **Our Menu:**\n\n");
    for (category, items) in catalog.by_category() {
        text.push_str(&format!("**{category}:**\n"));
        for item in items {
            text.push_str(&format!("• {} - {}\n", item.name, money(item.price)));
            text.push_str(&format!("  {}\n\n", item.description));
        }
    }
    text.push_str("Just tell me what you'd like to add to your cart! 🛒");
    text
}

/// Confirmation after items were added to the cart.
pub fn added_text(added: &[MenuItem], cart: &Cart) -> String {
    let names: Vec<&str> = added.iter().map(|item| item.name.as_str()).collect();
    format!(
        "Great! I've added {} to your cart! 🛒\n\nCurrent total: {}\n\n\
         Would you like to add anything else, view your cart, or confirm your order?",
        names.join(", "),
        money(cart.total()),
    )
}

/// The current cart contents with the running total.
pub fn cart_text(cart: &Cart) -> String {
    let mut text = String::from("🛒 **Your Cart:**\n\n");
    for line in cart.lines() {
        text.push_str(&cart_line(line));
    }
    text.push_str(&format!(
        "\n**Total: {}**\n\nWould you like to add more items or confirm your order?",
        money(cart.total()),
    ));
    text
}

/// The order receipt shown on confirmation.
pub fn receipt_text(order: &Cart) -> String {
    let mut text = format!(
        "🎉 Order confirmed! Your total is {}\n\n**Order Summary:**\n",
        money(order.total()),
    );
    for line in order.lines() {
        text.push_str(&cart_line(line));
    }
    text.push_str("\nYour order will be ready in 15-20 minutes. Thank you for ordering with us!");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn cart_with(names: &[&str]) -> Cart {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        for name in names {
            cart.add(catalog.get(name).unwrap());
        }
        cart
    }

    #[test]
    fn money_renders_two_decimals() {
        assert_eq!(money(dec!(12.99)), "$12.99");
        assert_eq!(money(dec!(8.9)), "$8.90");
        assert_eq!(money(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn menu_lists_every_item_under_its_category() {
        let text = menu_text(&Catalog::builtin());
        assert!(text.starts_with("🍽️ **Our Menu:**\n\n"));
        assert!(text.contains("**Pizza:**\n• Margherita Pizza - $12.99\n"));
        assert!(text.contains("  Classic pizza with tomato sauce, mozzarella, and fresh basil\n\n"));
        assert!(text.contains("**Dessert:**\n• Chocolate Cake - $6.99\n"));
        assert!(text.ends_with("Just tell me what you'd like to add to your cart! 🛒"));
    }

    #[test]
    fn added_reply_names_items_and_total() {
        let catalog = Catalog::builtin();
        let added = vec![
            catalog.get("Margherita Pizza").unwrap().clone(),
            catalog.get("Caesar Salad").unwrap().clone(),
        ];
        let cart = cart_with(&["Margherita Pizza", "Caesar Salad"]);

        let text = added_text(&added, &cart);
        assert!(text.contains("I've added Margherita Pizza, Caesar Salad to your cart!"));
        assert!(text.contains("Current total: $21.98"));
        assert!(text.ends_with("view your cart, or confirm your order?"));
    }

    #[test]
    fn cart_reply_shows_lines_and_total() {
        let cart = cart_with(&["Margherita Pizza"]);
        let text = cart_text(&cart);
        assert!(text.starts_with("🛒 **Your Cart:**\n\n"));
        assert!(text.contains("• Margherita Pizza - $12.99\n"));
        assert!(text.contains("\n**Total: $12.99**\n"));
    }

    #[test]
    fn repeated_items_render_with_quantity_and_subtotal() {
        let cart = cart_with(&["Beef Burger", "Beef Burger"]);
        let text = cart_text(&cart);
        assert!(text.contains("• Beef Burger x2 - $23.98\n"));
        assert!(text.contains("**Total: $23.98**"));
    }

    #[test]
    fn receipt_recaps_the_order() {
        let order = cart_with(&["Margherita Pizza", "Caesar Salad"]);
        let text = receipt_text(&order);
        assert!(text.starts_with("🎉 Order confirmed! Your total is $21.98\n\n**Order Summary:**\n"));
        assert!(text.contains("• Margherita Pizza - $12.99\n"));
        assert!(text.contains("• Caesar Salad - $8.99\n"));
        assert!(text.ends_with("ready in 15-20 minutes. Thank you for ordering with us!"));
    }
}
