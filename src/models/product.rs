use serde::{Deserialize, Serialize};

use super::CartItem;

/// A product offered on the listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// The line item an "add to cart" click on this product dispatches.
    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(self.name.clone(), 1, self.price, self.image.clone())
    }
}

/// A product as rendered on the listing view, with how many are in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingEntry {
    #[serde(flatten)]
    pub product: Product,
    pub in_cart: u32,
}
