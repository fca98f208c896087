//! Plain-text rendering of the landing, listing and cart views for the terminal.

use crate::models::{CartView, LandingView, ListingEntry};

pub fn render_landing(view: &LandingView) -> String {
    format!(
        "{}\n{}\n\nProducts: {}\nCart:     {} ({} item(s))\n",
        view.title, view.tagline, view.listing, view.cart, view.item_count
    )
}

/// Render the cart as one line per item followed by the unit count.
///
/// Example output:
/// ```text
///   2 x Shoe                  50.00
///   1 x Hat                   15.00
/// 3 item(s) in cart
/// ```
pub fn render_cart(view: &CartView) -> String {
    if view.items.is_empty() {
        return "Your cart is empty\n".to_string();
    }

    let mut output = String::new();
    for item in &view.items {
        output.push_str(&format!(
            "{:>3} x {:<20} {:>8.2}\n",
            item.quantity, item.name, item.unit_price
        ));
    }
    output.push_str(&format!("{} item(s) in cart\n", view.item_count));
    output
}

/// Render the product listing, marking products already in the cart.
pub fn render_listing(entries: &[ListingEntry]) -> String {
    if entries.is_empty() {
        return "No products available\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let marker = if entry.in_cart > 0 {
            format!(" [{} in cart]", entry.in_cart)
        } else {
            String::new()
        };
        output.push_str(&format!(
            "{:<20} {:>8.2}{}\n",
            entry.product.name, entry.product.price, marker
        ));
        if let Some(description) = &entry.product.description {
            output.push_str("    ");
            output.push_str(description);
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CartItem, Product};

    #[test]
    fn landing_shows_cart_count() {
        let view = LandingView {
            title: "Storefront".into(),
            tagline: "Welcome".into(),
            listing: "/api/v1/product/list".into(),
            cart: "/api/v1/product/cart".into(),
            item_count: 4,
        };
        let output = render_landing(&view);
        assert!(output.starts_with("Storefront\nWelcome\n"));
        assert!(output.contains("Cart:     /api/v1/product/cart (4 item(s))"));
    }

    #[test]
    fn empty_cart() {
        let view = CartView {
            items: vec![],
            item_count: 0,
        };
        assert_eq!(render_cart(&view), "Your cart is empty\n");
    }

    #[test]
    fn cart_lines_keep_insertion_order() {
        let view = CartView {
            items: vec![
                CartItem::new("Shoe", 2, 50.0, "img1"),
                CartItem::new("Hat", 1, 15.0, "img2"),
            ],
            item_count: 3,
        };
        let output = render_cart(&view);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("2 x Shoe"));
        assert!(lines[0].ends_with("50.00"));
        assert!(lines[1].contains("1 x Hat"));
        assert_eq!(lines[2], "3 item(s) in cart");
    }

    #[test]
    fn listing_marks_products_in_cart() {
        let entries = vec![
            ListingEntry {
                product: Product {
                    name: "Shoe".into(),
                    price: 50.0,
                    image: "img1".into(),
                    description: Some("Everyday running shoe".into()),
                },
                in_cart: 2,
            },
            ListingEntry {
                product: Product {
                    name: "Hat".into(),
                    price: 15.0,
                    image: "img2".into(),
                    description: None,
                },
                in_cart: 0,
            },
        ];
        let output = render_listing(&entries);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("[2 in cart]"));
        assert_eq!(lines[1], "    Everyday running shoe");
        assert!(!lines[2].contains("in cart"));
    }
}
