use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One line of the shopping cart: a distinct product and how many of it.
///
/// `name` is the line's key. Two items with the same name are the same line,
/// so the cart never holds duplicates (see [`crate::cart::CartState`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    /// Always at least 1 while the item sits in a cart.
    #[serde(alias = "qty")]
    pub quantity: u32,
    #[serde(alias = "price")]
    pub unit_price: f64,
    /// Image reference used by the listing and cart views.
    pub image: String,
}

impl CartItem {
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        unit_price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
            image: image.into(),
        }
    }

    /// Check the caller contract for `addItem`.
    ///
    /// The store accepts any item; this is the check applied at the
    /// boundary (HTTP handlers, catalog loading) before an item reaches it.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.name.trim().is_empty() {
            return Err(CartError::EmptyName);
        }
        if self.quantity == 0 {
            return Err(CartError::ZeroQuantity(self.name.clone()));
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(CartError::InvalidPrice {
                name: self.name.clone(),
                price: self.unit_price,
            });
        }
        Ok(())
    }
}

/// Rejections raised when an item breaks the `addItem` contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    #[error("item name must not be empty")]
    EmptyName,

    #[error("item '{0}' must have a quantity of at least 1")]
    ZeroQuantity(String),

    #[error("item '{name}' has an invalid price: {price}")]
    InvalidPrice { name: String, price: f64 },
}
