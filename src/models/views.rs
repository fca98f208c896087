use serde::{Deserialize, Serialize};

use super::CartItem;

/// Response for the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingView {
    pub title: String,
    pub tagline: String,
    /// Absolute path of the product listing view.
    pub listing: String,
    /// Absolute path of the cart view.
    pub cart: String,
    pub item_count: u32,
}

/// Response for the shopping cart view.
///
/// `items` is the cart in insertion order; `item_count` sums their quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub item_count: u32,
}
